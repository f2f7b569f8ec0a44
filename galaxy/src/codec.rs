//! Converting between terms and bit strings.
//!
//! Only numbers, `nil`, and pairs of these can be converted.
//!
//! | Term       | Bits                                              |
//! |------------|---------------------------------------------------|
//! | `nil`      | `00`                                              |
//! | `cons a b` | `11`, then the bits of `a`, then the bits of `b`   |
//! | number     | sign, length in unary, magnitude                  |
//!
//! The sign of a number is `01` if it is non-negative and `10` if it is
//! negative, including negative zero. It is followed by one `1` for every
//! four bits of magnitude and a terminating `0`, and then by the magnitude
//! itself, most significant bit first.

use {
    crate::{
        eval::{self, Evaluator},
        integer::Integer,
        term::{Primitive, Term},
    },
    std::{fmt, rc::Rc, str::FromStr},
    thiserror::Error,
};

/// Sequence of bits produced by modulation.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Bits(pub Vec<bool>);

/// Returned when parsing bits from a string fails.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("Invalid bit: ‘{0}’")]
pub struct ParseBitsError(pub char);

/// Returned when bits do not encode a term.
#[allow(missing_docs)]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DemodulateError
{
    #[error("unexpected end of bits")]
    UnexpectedEnd,

    #[error("{0} trailing bits")]
    TrailingBits(usize),

    #[error("integer does not fit in 64 bits")]
    IntegerTooLarge,
}

impl Bits
{
    /// The bits in order.
    pub fn as_slice(&self) -> &[bool]
    {
        &self.0
    }

    /// Number of bits.
    pub fn len(&self) -> usize
    {
        self.0.len()
    }

    /// Whether there are no bits.
    pub fn is_empty(&self) -> bool
    {
        self.0.is_empty()
    }

    fn push_all(&mut self, bits: &[bool])
    {
        self.0.extend_from_slice(bits);
    }
}

impl FromStr for Bits
{
    type Err = ParseBitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        s.chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                _   => Err(ParseBitsError(c)),
            })
            .collect::<Result<_, _>>()
            .map(Self)
    }
}

impl fmt::Display for Bits
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    {
        write!(f, "{{ ")?;
        for (i, &bit) in self.0.iter().enumerate() {
            if i != 0 { write!(f, ",")?; }
            write!(f, "{}", u8::from(bit))?;
        }
        write!(f, " }}")
    }
}

const NIL: [bool; 2] = [false, false];
const PAIR: [bool; 2] = [true, true];
const NON_NEGATIVE: [bool; 2] = [false, true];
const NEGATIVE: [bool; 2] = [true, false];

/// Evaluate a term as deeply as needed and convert it to bits.
pub fn modulate(evaluator: &mut Evaluator, term: &Rc<Term>) -> eval::Result<Bits>
{
    let mut bits = Bits::default();
    modulate_into(evaluator, term, &mut bits)?;
    Ok(bits)
}

fn modulate_into(evaluator: &mut Evaluator, term: &Rc<Term>, bits: &mut Bits)
    -> eval::Result<()>
{
    // Walk the spine of a list iteratively; only heads recurse.
    let mut term = evaluator.evaluate(term)?;
    loop {
        let tail = match &*term {
            Term::Primitive(Primitive::Nil) => {
                bits.push_all(&NIL);
                return Ok(());
            },
            Term::Number(integer) => {
                modulate_integer(*integer, bits);
                return Ok(());
            },
            Term::Pair(head, tail) => {
                bits.push_all(&PAIR);
                modulate_into(evaluator, head, bits)?;
                tail.clone()
            },
            other =>
                return Err(eval::Error::NotModulatable(other.kind())),
        };
        term = evaluator.evaluate(&tail)?;
    }
}

/// Append the bits of an integer.
pub fn modulate_integer(integer: Integer, bits: &mut Bits)
{
    bits.push_all(if integer.is_negative() { &NEGATIVE } else { &NON_NEGATIVE });

    let magnitude = integer.magnitude();
    let width = (u64::BITS - magnitude.leading_zeros()).div_ceil(4) * 4;

    bits.0.extend((0 .. width / 4).map(|_| true));
    bits.0.push(false);
    bits.0.extend((0 .. width).rev().map(|i| magnitude >> i & 1 == 1));
}

/// Convert bits back to the term they encode.
pub fn demodulate(bits: &Bits) -> Result<Rc<Term>, DemodulateError>
{
    let mut reader = Reader{bits: bits.as_slice(), position: 0};
    let term = reader.read_term()?;
    match bits.len() - reader.position {
        0 => Ok(term),
        n => Err(DemodulateError::TrailingBits(n)),
    }
}

struct Reader<'a>
{
    bits: &'a [bool],
    position: usize,
}

impl Reader<'_>
{
    fn read_term(&mut self) -> Result<Rc<Term>, DemodulateError>
    {
        // Heads of pairs along the spine, innermost last.
        let mut heads = Vec::new();

        let last = loop {
            match [self.read_bit()?, self.read_bit()?] {
                NIL          => break Term::nil(),
                PAIR         => heads.push(self.read_term()?),
                NON_NEGATIVE => break self.read_integer(false)?,
                _            => break self.read_integer(true)?,
            }
        };

        Ok(heads.into_iter().rev().fold(last, |tail, head| Term::pair(head, tail)))
    }

    fn read_integer(&mut self, negative: bool) -> Result<Rc<Term>, DemodulateError>
    {
        let mut width = 0;
        while self.read_bit()? {
            width += 4;
            if width > u64::BITS {
                return Err(DemodulateError::IntegerTooLarge);
            }
        }

        let mut magnitude = 0u64;
        for _ in 0 .. width {
            magnitude = magnitude << 1 | u64::from(self.read_bit()?);
        }

        let integer = Integer::from_sign_magnitude(negative, magnitude)
            .ok_or(DemodulateError::IntegerTooLarge)?;
        Ok(Rc::new(Term::Number(integer)))
    }

    fn read_bit(&mut self) -> Result<bool, DemodulateError>
    {
        let bit = *self.bits.get(self.position)
            .ok_or(DemodulateError::UnexpectedEnd)?;
        self.position += 1;
        Ok(bit)
    }
}

#[cfg(test)]
mod tests
{
    use {
        super::*,
        crate::{environment::Environment, eval::Limits, syntax::parse::parse_input},
        proptest::{collection::vec, proptest},
    };

    fn bits(s: &str) -> Bits
    {
        s.parse().unwrap()
    }

    fn modulate_input(input: &str) -> eval::Result<Bits>
    {
        let mut environment = Environment::new();
        let mut evaluator = Evaluator::new(&mut environment, Limits::default());
        modulate(&mut evaluator, &parse_input(input).unwrap())
    }

    #[test]
    fn numbers()
    {
        for (input, expected) in [
            ("0",    "010"),
            ("-0",   "100"),
            ("1",    "01100001"),
            ("-1",   "10100001"),
            ("15",   "01101111"),
            ("16",   "0111000010000"),
            ("-255", "1011011111111"),
            ("256",  "011110000100000000"),
        ] {
            assert_eq!(modulate_input(input), Ok(bits(expected)), "{input}");
        }
    }

    #[test]
    fn extreme_numbers()
    {
        let min = modulate_input("-9223372036854775808").unwrap();
        assert_eq!(min.len(), 2 + 16 + 1 + 64);
        assert_eq!(demodulate(&min).unwrap().to_string(), "-9223372036854775808");
    }

    #[test]
    fn lists()
    {
        assert_eq!(modulate_input("nil"), Ok(bits("00")));
        assert_eq!(modulate_input("ap ap cons nil nil"), Ok(bits("110000")));
        assert_eq!(
            modulate_input("ap ap cons 1 2"),
            Ok(bits("110110000101100010")),
        );
        assert_eq!(
            modulate_input("ap ap cons 1 ap ap cons 2 nil"),
            Ok(bits("1101100001110110001000")),
        );
    }

    #[test]
    fn not_modulatable()
    {
        assert_eq!(
            modulate_input("ap add 1"),
            Err(eval::Error::NotModulatable("partial application")),
        );
        assert_eq!(
            modulate_input("ap ap cons 1 inc"),
            Err(eval::Error::NotModulatable("inc")),
        );
    }

    #[test]
    fn display()
    {
        assert_eq!(bits("010").to_string(), "{ 0,1,0 }");
        assert_eq!("012".parse::<Bits>(), Err(ParseBitsError('2')));
    }

    #[test]
    fn demodulate_errors()
    {
        assert_eq!(demodulate(&bits("")), Err(DemodulateError::UnexpectedEnd));
        assert_eq!(demodulate(&bits("0110")), Err(DemodulateError::UnexpectedEnd));
        assert_eq!(demodulate(&bits("11000")), Err(DemodulateError::UnexpectedEnd));
        assert_eq!(demodulate(&bits("0101")), Err(DemodulateError::TrailingBits(1)));
        assert_eq!(
            demodulate(&bits(&format!("01{}0", "1".repeat(17)))),
            Err(DemodulateError::IntegerTooLarge),
        );
        assert_eq!(
            demodulate(&bits(&format!("01{}01{}", "1".repeat(16), "0".repeat(63)))),
            Err(DemodulateError::IntegerTooLarge),
        );
    }

    proptest! {
        #[test]
        fn demodulate_inverts_modulate(values in vec(proptest::num::i64::ANY, 0 .. 8))
        {
            let input = values.iter().rev().fold("nil".to_owned(), |tail, value| {
                format!("ap ap cons {value} {tail}")
            });
            let modulated = modulate_input(&input).unwrap();
            let expected = values.iter().rev().fold(Term::nil(), |tail, &value| {
                Term::pair(Term::number(value), tail)
            });
            assert_eq!(demodulate(&modulated), Ok(expected));
        }

        #[test]
        fn integer_width(value: i64)
        {
            let mut bits = Bits::default();
            modulate_integer(value.into(), &mut bits);
            let ones = bits.0[2 ..].iter().take_while(|&&bit| bit).count();
            assert_eq!(bits.len(), 2 + ones + 1 + ones * 4);
            assert!(ones == 16 || value.unsigned_abs() >> (ones * 4) == 0);
        }
    }
}
