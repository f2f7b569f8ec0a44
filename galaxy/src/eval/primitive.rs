use {
    super::{Error, Evaluator, Reduction, Result},
    crate::{
        codec::{demodulate, modulate},
        integer::Integer,
        term::{Primitive, Term},
    },
    std::rc::Rc,
};

impl Evaluator<'_>
{
    /// Compute a primitive applied to exactly as many arguments as its arity.
    pub(super) fn saturated(&mut self, primitive: Primitive, arguments: &[Rc<Term>])
        -> Result<Reduction>
    {
        use {Primitive::*, Reduction::*};

        let done = |integer: Integer| Done(Rc::new(Term::Number(integer)));
        let overflow = || Error::Overflow(primitive);

        match (primitive, arguments) {

            (Inc, [x]) => {
                let x = self.number(primitive, x)?;
                let result = x.value().checked_add(1).ok_or_else(overflow)?;
                Ok(done(result.into()))
            },

            (Dec, [x]) => {
                let x = self.number(primitive, x)?;
                let result = x.value().checked_sub(1).ok_or_else(overflow)?;
                Ok(done(result.into()))
            },

            (Neg, [x]) => {
                let x = self.number(primitive, x)?;
                Ok(done(x.checked_neg().ok_or_else(overflow)?))
            },

            (Add | Mul | Div | Eq | Lt, [x, y]) => {
                let x = self.number(primitive, x)?.value();
                let y = self.number(primitive, y)?.value();
                let result = match primitive {
                    Add => x.checked_add(y),
                    Mul => x.checked_mul(y),
                    Div if y == 0 => Some(0),
                    Div => x.checked_div(y),
                    Eq  => return Ok(Done(Term::boolean(x == y))),
                    Lt  => return Ok(Done(Term::boolean(x < y))),
                    _   => unreachable!(),
                };
                Ok(done(result.ok_or_else(overflow)?.into()))
            },

            (S, [x, y, z]) =>
                Ok(Continue(Term::application(
                    Term::application(x.clone(), z.clone()),
                    Term::application(y.clone(), z.clone()),
                ))),

            (C, [x, y, z]) =>
                Ok(Continue(Term::application(
                    Term::application(x.clone(), z.clone()),
                    y.clone(),
                ))),

            (B, [x, y, z]) =>
                Ok(Continue(Term::application(
                    x.clone(),
                    Term::application(y.clone(), z.clone()),
                ))),

            (I, [x]) =>
                Ok(Continue(x.clone())),

            (True, [x, _]) =>
                Ok(Continue(x.clone())),

            (False, [_, y]) =>
                Ok(Continue(y.clone())),

            (Cons, [x, y]) =>
                Ok(Done(Term::pair(x.clone(), y.clone()))),

            (Car | Cdr, [x]) => {
                let value = self.evaluate(x)?;
                match &*value {
                    Term::Pair(fst, _) if primitive == Car => Ok(Continue(fst.clone())),
                    Term::Pair(_, snd) => Ok(Continue(snd.clone())),
                    other => Err(Error::NotAPair{primitive, got: other.kind()}),
                }
            },

            (IsNil, [x]) => {
                let value = self.evaluate(x)?;
                let is_nil = matches!(*value, Term::Primitive(Nil));
                Ok(Done(Term::boolean(is_nil)))
            },

            (If0, [n, x, y]) => {
                let n = self.number(primitive, n)?;
                Ok(Continue(if n.value() == 0 { x.clone() } else { y.clone() }))
            },

            (Draw, [x]) => {
                let points = self.draw(primitive, x)?;
                Ok(Done(Rc::new(Term::Image(points))))
            },

            (MultiDraw, [x]) => {
                let images = self.multiple_draw(x)?;
                Ok(Done(Rc::new(Term::MultiImage(images))))
            },

            (Modulate, [x]) => {
                let bits = modulate(self, x)?;
                Ok(Done(Rc::new(Term::Modulated(bits))))
            },

            (Demodulate, [x]) => {
                let value = self.evaluate(x)?;
                match &*value {
                    Term::Modulated(bits) => Ok(Done(demodulate(bits)?)),
                    other => Err(Error::NotModulated{got: other.kind()}),
                }
            },

            (ModulateDemodulate, [x]) => {
                let bits = modulate(self, x)?;
                Ok(Done(demodulate(&bits)?))
            },

            _ => unreachable!("{primitive} applied to {} arguments", arguments.len()),

        }
    }

    /// Evaluate an argument that must be a number.
    pub(super) fn number(&mut self, primitive: Primitive, term: &Rc<Term>)
        -> Result<Integer>
    {
        let value = self.evaluate(term)?;
        match &*value {
            Term::Number(integer) => Ok(*integer),
            other => Err(Error::NotANumber{primitive, got: other.kind()}),
        }
    }
}

#[cfg(test)]
mod tests
{
    use {
        crate::{environment::Environment, eval::evaluate, syntax::parse::parse_input},
        proptest::proptest,
    };

    fn print(input: &str) -> String
    {
        let term = parse_input(input).unwrap();
        match evaluate(&mut Environment::new(), &term) {
            Ok(value) => value.to_string(),
            Err(err) => format!("error: {err}"),
        }
    }

    #[test]
    fn arithmetic()
    {
        assert_eq!(print("ap inc -41"), "-40");
        assert_eq!(print("ap dec 0"), "-1");
        assert_eq!(print("ap ap add -42 42"), "0");
        assert_eq!(print("ap ap mul 3 -2"), "-6");
        assert_eq!(print("ap neg -2"), "2");
        assert_eq!(print("ap neg 0"), "0");
        assert_eq!(print("ap ap add ap ap mul 2 3 4"), "10");
    }

    #[test]
    fn division()
    {
        assert_eq!(print("ap ap div 4 3"), "1");
        assert_eq!(print("ap ap div 6 -2"), "-3");
        assert_eq!(print("ap ap div 5 -3"), "-1");
        assert_eq!(print("ap ap div -5 3"), "-1");
        assert_eq!(print("ap ap div -5 -3"), "1");
        assert_eq!(print("ap ap div 0 0"), "0");
        assert_eq!(print("ap ap div 7 0"), "0");
    }

    #[test]
    fn comparisons()
    {
        assert_eq!(print("ap ap eq -1 -1"), "t");
        assert_eq!(print("ap ap eq 0 -1"), "f");
        assert_eq!(print("ap ap eq 0 -0"), "t");
        assert_eq!(print("ap ap lt -11 -10"), "t");
        assert_eq!(print("ap ap lt 1 1"), "f");
    }

    #[test]
    fn overflow()
    {
        assert_eq!(
            print("ap inc 9223372036854775807"),
            "error: Arithmetic overflow in ‘inc’",
        );
        assert_eq!(
            print("ap ap div -9223372036854775808 -1"),
            "error: Arithmetic overflow in ‘div’",
        );
        assert_eq!(
            print("ap neg -9223372036854775808"),
            "error: Arithmetic overflow in ‘neg’",
        );
    }

    #[test]
    fn type_errors()
    {
        assert_eq!(
            print("ap ap add nil 42"),
            "error: Type error: ‘add’ needs numeric arguments, got nil",
        );
        assert_eq!(
            print("ap inc inc"),
            "error: Type error: ‘inc’ needs numeric arguments, got inc",
        );
        assert_eq!(
            print("ap car 1"),
            "error: Type error: ‘car’ needs a list argument, got number",
        );
        assert_eq!(
            print("ap ap ap if0 nil 1 2"),
            "error: Type error: ‘if0’ needs numeric arguments, got nil",
        );
    }

    #[test]
    fn combinators()
    {
        assert_eq!(print("ap ap ap s add inc 1"), "3");
        assert_eq!(print("ap ap ap s mul ap add 1 6"), "42");
        assert_eq!(print("ap ap ap c add 1 2"), "3");
        assert_eq!(print("ap ap ap b inc dec 1337"), "1337");
        assert_eq!(print("ap ap t t ap inc 5"), "t");
        assert_eq!(print("ap ap t ap inc 5 t"), "6");
        assert_eq!(print("ap ap ap s t 31 33"), "33");
        assert_eq!(print("ap i add"), "add");
    }

    #[test]
    fn lists()
    {
        assert_eq!(print("ap ap cons 1 2"), "cons 1 2");
        assert_eq!(print("ap ap vec 1 2"), "cons 1 2");
        assert_eq!(print("ap car ap ap cons 0 1"), "0");
        assert_eq!(print("ap cdr ap ap cons 0 1"), "1");
        assert_eq!(print("ap car ap ap cons ap inc 0 1"), "1");
        assert_eq!(print("ap isnil nil"), "t");
        assert_eq!(print("ap isnil ap ap cons 0 1"), "f");
        assert_eq!(print("ap isnil 0"), "f");
    }

    #[test]
    fn if0()
    {
        assert_eq!(print("ap ap ap if0 0 1 2"), "1");
        assert_eq!(print("ap ap ap if0 -0 1 2"), "1");
        assert_eq!(print("ap ap ap if0 5 1 2"), "2");
        assert_eq!(print("ap ap ap if0 0 1 ap inc nil"), "1");
    }

    #[test]
    fn modulation()
    {
        assert_eq!(print("ap mod 0"), "{ 0,1,0 }");
        assert_eq!(print("ap mod ap ap cons nil nil"), "{ 1,1,0,0,0,0 }");
        assert_eq!(print("ap dem ap mod ap ap cons 1 nil"), "cons 1 nil");
        assert_eq!(print("ap modem ap ap cons 1 nil"), "cons 1 nil");
        assert_eq!(print("ap modem -0"), "0");
        assert_eq!(
            print("ap mod inc"),
            "error: Type error: ‘mod’ cannot modulate inc",
        );
        assert_eq!(
            print("ap dem 1"),
            "error: Type error: ‘dem’ needs a modulated argument, got number",
        );
    }

    proptest! {
        #[test]
        fn division_truncates(a: i32, b: i32)
        {
            let input = format!("ap ap div {a} {b}");
            let expected = if b == 0 { 0 } else { i64::from(a) / i64::from(b) };
            assert_eq!(print(&input), expected.to_string());
        }

        #[test]
        fn two_step_application(a: i32, b: i32)
        {
            let mut environment = Environment::new();
            let partial = parse_input(&format!("p = ap add {a}")).unwrap();
            evaluate(&mut environment, &partial).unwrap();
            let applied = parse_input(&format!("ap p {b}")).unwrap();
            let result = evaluate(&mut environment, &applied).unwrap();
            assert_eq!(result.to_string(), print(&format!("ap ap add {a} {b}")));
        }
    }
}
