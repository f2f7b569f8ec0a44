use {
    super::{Error, Evaluator, Result},
    crate::term::{Point, Primitive, Term},
    std::rc::Rc,
};

impl Evaluator<'_>
{
    /// Collect the points of a list of coordinate pairs.
    ///
    /// Each point is written either `cons x y` or `cons x (cons y nil)`.
    pub(super) fn draw(&mut self, primitive: Primitive, list: &Rc<Term>)
        -> Result<Vec<Point>>
    {
        let mut points = Vec::new();
        let mut list = self.evaluate(list)?;
        loop {
            let (head, tail) = match &*list {
                Term::Primitive(Primitive::Nil) =>
                    return Ok(points),
                Term::Pair(head, tail) =>
                    (head.clone(), tail.clone()),
                other =>
                    return Err(Error::NotAList{primitive, got: other.kind()}),
            };
            points.push(self.point(primitive, &head)?);
            list = self.evaluate(&tail)?;
        }
    }

    /// Collect the layers of a list of lists of coordinate pairs.
    ///
    /// An empty inner list is an empty layer.
    pub(super) fn multiple_draw(&mut self, list: &Rc<Term>)
        -> Result<Vec<Vec<Point>>>
    {
        let primitive = Primitive::MultiDraw;
        let mut images = Vec::new();
        let mut list = self.evaluate(list)?;
        loop {
            let (head, tail) = match &*list {
                Term::Primitive(Primitive::Nil) =>
                    return Ok(images),
                Term::Pair(head, tail) =>
                    (head.clone(), tail.clone()),
                other =>
                    return Err(Error::NotAList{primitive, got: other.kind()}),
            };
            images.push(self.draw(primitive, &head)?);
            list = self.evaluate(&tail)?;
        }
    }

    fn point(&mut self, primitive: Primitive, term: &Rc<Term>) -> Result<Point>
    {
        let point = self.evaluate(term)?;
        let Term::Pair(x, rest) = &*point else {
            return Err(Error::NotAPoint{primitive, got: point.kind()});
        };
        let x = self.coordinate(primitive, x)?;
        let rest = self.evaluate(rest)?;
        let y = match &*rest {
            Term::Number(y) => y.value(),
            Term::Pair(y, _) => self.coordinate(primitive, y)?,
            _ => return Err(Error::NonNumericPoint(primitive)),
        };
        Ok(Point{x, y})
    }

    fn coordinate(&mut self, primitive: Primitive, term: &Rc<Term>) -> Result<i64>
    {
        match &*self.evaluate(term)? {
            Term::Number(integer) => Ok(integer.value()),
            _ => Err(Error::NonNumericPoint(primitive)),
        }
    }
}
