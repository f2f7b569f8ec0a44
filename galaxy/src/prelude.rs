//! Standard definitions that can be preloaded into a session.
//!
//! See [`Session::with_prelude`](`crate::Session::with_prelude`).

/// Definitions in the order in which they are loaded.
///
/// Later definitions refer to earlier ones, but since bindings are resolved
/// when they are used, the order only matters for redefinitions.
pub const PRELUDE: &[&str] = &[
    // 2 to the power of a non-negative number.
    "pwr2 = ap ap s ap ap c ap eq 0 1 ap ap b ap mul 2 ap ap b pwr2 ap add -1",

    // List of the black cells of a checkerboard, given its size and a start.
    "checkerboard = ap ap s ap ap b s ap ap c ap ap b c ap ap b ap c ap c ap ap s \
     ap ap b s ap ap b ap b ap ap s i i lt eq ap ap s mul i nil ap ap s ap ap b s \
     ap ap b ap b cons ap ap s ap ap b s ap ap b ap b cons ap c div ap c ap ap s \
     ap ap b b ap ap c ap ap b b add neg ap ap b ap s mul div ap ap c ap ap b b \
     checkerboard ap ap c add 2",

    "cb1 = ap ap checkerboard 9 11",
    "cb2 = ap ap checkerboard 9 39",
    "cb3 = ap ap checkerboard 9 4",
    "cbs = ap ap cons cb1 ap ap cons cb2 ap ap cons cb3 nil",
    "showmethemagic = ap multipledraw cbs",

    // Stateless drawing protocol: the new state is the old one,
    // and the only image contains the clicked point.
    "statelessdraw = ap ap c ap ap b b ap ap b ap b ap cons 0 ap ap c ap ap b b \
     cons ap ap c cons nil ap ap c ap ap b cons ap ap c cons nil nil",
];

#[cfg(test)]
mod tests
{
    use {super::*, crate::{syntax::parse::parse_input, term::Term}};

    #[test]
    fn definitions_parse()
    {
        for definition in PRELUDE {
            let term = parse_input(definition).unwrap();
            assert!(matches!(*term, Term::Assignment{..}), "{definition}");
        }
    }
}
