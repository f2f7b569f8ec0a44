//! Terms are both the syntax and the values of the language.

use {
    crate::{codec::Bits, integer::Integer},
    serde::Serialize,
    smallvec::SmallVec,
    std::rc::Rc,
};

mod display;

/// Node of a program, or the result of evaluating one.
///
/// Terms are immutable and shared through [`Rc`].
/// Evaluation never modifies a term; it builds new ones.
#[allow(missing_docs)]
#[derive(Clone, Debug, PartialEq)]
pub enum Term
{
    /// Integer literal.
    Number(Integer),

    /// Reference to a binding in the environment.
    ///
    /// Evaluates to itself when unbound.
    Symbol(Rc<str>),

    /// `name = value`
    ///
    /// Evaluating it binds the *unevaluated* value.
    Assignment{
        name: Rc<str>,
        value: Rc<Term>,
    },

    /// `ap function argument`
    Application{
        function: Rc<Term>,
        argument: Rc<Term>,
    },

    /// Built-in function or constant.
    Primitive(Primitive),

    /// Primitive that has received fewer arguments than its arity.
    ///
    /// Never produced by the parser.
    Partial(Partial),

    /// Result of saturating `cons`.
    Pair(Rc<Term>, Rc<Term>),

    /// Result of `draw`.
    Image(Vec<Point>),

    /// Result of `multipledraw`.
    MultiImage(Vec<Vec<Point>>),

    /// Result of `mod`.
    Modulated(Bits),
}

/// Arguments supplied to a partially applied primitive.
pub type Arguments =
    SmallVec<[Rc<Term>; 2]>;

/// Primitive awaiting more arguments.
#[derive(Clone, Debug, PartialEq)]
pub struct Partial
{
    /// The primitive being applied.
    pub primitive: Primitive,

    /// The arguments supplied so far, unevaluated, in order.
    pub arguments: Arguments,
}

/// Point on an image.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Point
{
    pub x: i64,
    pub y: i64,
}

impl Term
{
    /// Create a number term.
    pub fn number(value: i64) -> Rc<Self>
    {
        Rc::new(Self::Number(value.into()))
    }

    /// Create a symbol term.
    pub fn symbol(name: &str) -> Rc<Self>
    {
        Rc::new(Self::Symbol(name.into()))
    }

    /// Create an application term.
    pub fn application(function: Rc<Self>, argument: Rc<Self>) -> Rc<Self>
    {
        Rc::new(Self::Application{function, argument})
    }

    /// Create a pair term.
    pub fn pair(fst: Rc<Self>, snd: Rc<Self>) -> Rc<Self>
    {
        Rc::new(Self::Pair(fst, snd))
    }

    /// Create a primitive term.
    pub fn primitive(primitive: Primitive) -> Rc<Self>
    {
        Rc::new(Self::Primitive(primitive))
    }

    /// The empty list.
    pub fn nil() -> Rc<Self>
    {
        Self::primitive(Primitive::Nil)
    }

    /// `t` or `f`.
    pub fn boolean(value: bool) -> Rc<Self>
    {
        Self::primitive(if value { Primitive::True } else { Primitive::False })
    }

    /// Whether evaluating the term would return the term itself.
    pub fn is_normal(&self) -> bool
    {
        !matches!(
            self,
            Self::Symbol(..) | Self::Assignment{..} | Self::Application{..},
        )
    }

    /// Short description of the term used in error messages.
    pub fn kind(&self) -> &'static str
    {
        match self {
            Self::Number(..)         => "number",
            Self::Symbol(..)         => "symbol",
            Self::Assignment{..}     => "assignment",
            Self::Application{..}    => "application",
            Self::Primitive(p)       => p.name(),
            Self::Partial(..)        => "partial application",
            Self::Pair(..)           => "pair",
            Self::Image(..)          => "image",
            Self::MultiImage(..)     => "multiple image",
            Self::Modulated(..)      => "modulated bits",
        }
    }
}

impl Partial
{
    /// Number of arguments still missing.
    pub fn pending(&self) -> usize
    {
        let arity = self.primitive.arity().unwrap_or(0);
        arity.saturating_sub(self.arguments.len())
    }
}

macro_rules! primitives
{
    { $($(#[$meta:meta])* $name:ident $keyword:literal $arity:expr;)* } => {
        /// Built-in function or constant.
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        pub enum Primitive
        {
            $($(#[$meta])* $name,)*
        }

        impl Primitive
        {
            /// Every primitive.
            pub const ALL: &'static [Self] = &[$(Self::$name,)*];

            /// The keyword that denotes the primitive.
            pub fn name(self) -> &'static str
            {
                match self {
                    $(Self::$name => $keyword,)*
                }
            }

            /// Number of arguments the primitive needs before it computes.
            ///
            /// Returns [`None`] for primitives that cannot be applied.
            pub fn arity(self) -> Option<usize>
            {
                match self {
                    $(Self::$name => $arity,)*
                }
            }
        }
    };
}

primitives! {
    /** `inc x = x + 1` */             Inc                "inc"          Some(1);
    /** `dec x = x - 1` */             Dec                "dec"          Some(1);
    /** `add x y = x + y` */           Add                "add"          Some(2);
    /** `mul x y = x * y` */           Mul                "mul"          Some(2);
    /** `div x y = x / y` */           Div                "div"          Some(2);
    /** `eq x y = x == y` */           Eq                 "eq"           Some(2);
    /** `lt x y = x < y` */            Lt                 "lt"           Some(2);
    /** `neg x = -x` */                Neg                "neg"          Some(1);
    /** `mod x` */                     Modulate           "mod"          Some(1);
    /** `dem x` */                     Demodulate         "dem"          Some(1);
    /** `modem x = dem (mod x)` */     ModulateDemodulate "modem"        Some(1);
    /** `s x y z = x z (y z)` */       S                  "s"            Some(3);
    /** `c x y z = x z y` */           C                  "c"            Some(3);
    /** `b x y z = x (y z)` */         B                  "b"            Some(3);
    /** `i x = x` */                   I                  "i"            Some(1);
    /** `t x y = x` */                 True               "t"            Some(2);
    /** `f x y = y` */                 False              "f"            Some(2);
    /** `cons x y` */                  Cons               "cons"         Some(2);
    /** `car (cons x y) = x` */        Car                "car"          Some(1);
    /** `cdr (cons x y) = y` */        Cdr                "cdr"          Some(1);
    /** The empty list. */             Nil                "nil"          None;
    /** `isnil nil = t` */             IsNil              "isnil"        Some(1);
    /** `if0 0 x y = x` */             If0                "if0"          Some(3);
    /** `draw points` */               Draw               "draw"         Some(1);
    /** `multipledraw images` */       MultiDraw          "multipledraw" Some(1);
}

impl Primitive
{
    /// Look up the primitive denoted by a keyword.
    ///
    /// `vec` is accepted as an alias of `cons`.
    pub fn from_keyword(keyword: &str) -> Option<Self>
    {
        match keyword {
            "vec" => Some(Self::Cons),
            _     => Self::ALL.iter().copied().find(|p| p.name() == keyword),
        }
    }
}
