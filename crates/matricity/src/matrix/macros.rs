//! Declaring a function matrix alongside its function.

/// Builds a [`FunctionMatrix`](crate::FunctionMatrix) from a closure whose
/// parameters and result are annotated with domains instead of types.
///
/// Each parameter is written `name: domain` and the result `-> domain`, where
/// a domain is a single token tree: a variable, or any expression in
/// parentheses. The input domain is the left-to-right product of the
/// parameter domains. Parameters are bound by name, so a multi-parameter body
/// does not destructure a tuple itself. When there is more than one
/// parameter, each parameter domain must be a base domain: products flatten,
/// so a product-valued parameter would split into several tuple fields.
/// Domains are cloned, which only shares their storage.
///
/// # Example
///
/// ```
/// use matricity::{function_matrix, Domain, FiniteDomain};
///
/// let uint2 = Domain::new(0..4u8);
///
/// let maximum = function_matrix!(|x: uint2, y: uint2| -> uint2 { x.max(y) });
/// assert_eq!(maximum.shape(), (4, 16));
///
/// let v = maximum.input().encode(&(1, 3)).unwrap();
/// assert_eq!(maximum.apply(&v).unwrap(), vec![0, 0, 0, 1]);
///
/// let identity = function_matrix!(|x: (Domain::new(0..4u8))| -> uint2 { x });
/// assert!(identity.rows().unwrap().is_total());
/// ```
#[macro_export]
macro_rules! function_matrix {
    (|$arg:ident : $domain:tt| -> $codomain:tt $body:block) => {
        $crate::FunctionMatrix::new(
            |$arg| $body,
            ::core::clone::Clone::clone(&$domain),
            ::core::clone::Clone::clone(&$codomain),
        )
    };
    (|$first:ident : $first_domain:tt $(, $arg:ident : $domain:tt)+| -> $codomain:tt $body:block) => {
        $crate::FunctionMatrix::new(
            |($first, $($arg,)+)| $body,
            $crate::function_matrix!(@product [$first_domain] $($domain)+),
            ::core::clone::Clone::clone(&$codomain),
        )
    };
    (@product [$acc:expr]) => {
        $acc
    };
    (@product [$acc:expr] $next:tt $($rest:tt)*) => {
        $crate::function_matrix!(@product [$crate::Factors::product(&$acc, &$next)] $($rest)*)
    };
}
