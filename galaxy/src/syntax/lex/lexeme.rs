/// Token along with its location.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Lexeme<'a>
{
    /// Where the token starts.
    pub location: Location,

    /// The text of the token; never empty.
    pub text: &'a str,
}

/// Location within an input line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Location
{
    /// The byte offset in the input line.
    pub offset: usize,
}
