use {super::*, std::fmt::{Display, Formatter, Result}};

impl Display for Term
{
    fn fmt(&self, f: &mut Formatter) -> Result
    {
        match self {
            Self::Number(integer) =>
                write!(f, "{integer}"),
            Self::Symbol(name) =>
                write!(f, "{name}"),
            Self::Assignment{name, value} =>
                write!(f, "{name} = {value}"),
            Self::Application{function, argument} =>
                write!(f, "ap {function} {argument}"),
            Self::Primitive(primitive) =>
                write!(f, "{primitive}"),
            Self::Partial(..) =>
                write!(f, "<partial fn>"),
            Self::Pair(fst, snd) =>
                write!(f, "cons {fst} {snd}"),
            Self::Image(points) =>
                write_points(f, points),
            Self::MultiImage(images) => {
                write!(f, "[ ")?;
                for (i, points) in images.iter().enumerate() {
                    if i != 0 { write!(f, ",")?; }
                    write_points(f, points)?;
                }
                write!(f, " ]")
            },
            Self::Modulated(bits) =>
                write!(f, "{bits}"),
        }
    }
}

impl Display for Primitive
{
    fn fmt(&self, f: &mut Formatter) -> Result
    {
        write!(f, "{}", self.name())
    }
}

impl Display for Point
{
    fn fmt(&self, f: &mut Formatter) -> Result
    {
        write!(f, "({}, {})", self.x, self.y)
    }
}

fn write_points(f: &mut Formatter, points: &[Point]) -> Result
{
    write!(f, "[ ")?;
    for (i, point) in points.iter().enumerate() {
        if i != 0 { write!(f, ",")?; }
        write!(f, "{point}")?;
    }
    write!(f, " ]")
}
