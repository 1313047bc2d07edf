use log::trace;

use crate::config::KaratsubaConfig;
use crate::natural::Natural;

/// A single decomposition step: `x = a * 10^m + b` and `y = c * 10^m + d`.
#[derive(Debug)]
pub struct Split<'a> {
    pub depth: usize,
    pub x: &'a Natural,
    pub y: &'a Natural,
    pub m: usize,
    pub a: &'a Natural,
    pub b: &'a Natural,
    pub c: &'a Natural,
    pub d: &'a Natural,
}

/// The three recursive products of a step and the value they combine into.
#[derive(Debug)]
pub struct Combine<'a> {
    pub depth: usize,
    pub m: usize,
    pub ac: &'a Natural,
    pub bd: &'a Natural,
    pub a_plus_b: &'a Natural,
    pub c_plus_d: &'a Natural,
    /// `(a + b) * (c + d)`
    pub sum_product: &'a Natural,
    /// `ad + bc`, recovered as `sum_product - ac - bd`
    pub cross: &'a Natural,
    pub result: &'a Natural,
}

/// Observes the recursion of [`Karatsuba::multiply_traced`].
///
/// Events are reported in call order: a `split` is followed by the events of its
/// three sub-multiplications and then by its own `combine`.
pub trait Tracer {
    fn base_case(&mut self, _depth: usize, _x: &Natural, _y: &Natural, _product: &Natural) {}
    fn split(&mut self, _split: &Split) {}
    fn combine(&mut self, _combine: &Combine) {}
}

impl Tracer for () {}

/// Counts the work done by a multiplication.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallStats {
    pub base_cases: usize,
    pub splits: usize,
    pub max_depth: usize,
}

impl CallStats {
    /// Total number of invocations of the kernel, including the outermost one.
    pub fn calls(&self) -> usize {
        self.base_cases + self.splits
    }
}

impl Tracer for CallStats {
    fn base_case(&mut self, depth: usize, _x: &Natural, _y: &Natural, _product: &Natural) {
        self.base_cases += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    fn split(&mut self, split: &Split) {
        self.splits += 1;
        self.max_depth = self.max_depth.max(split.depth);
    }
}

#[derive(Clone, Debug, Default)]
pub struct Karatsuba {
    config: KaratsubaConfig,
}

impl Karatsuba {
    pub fn new(config: KaratsubaConfig) -> Self {
        Karatsuba { config }
    }

    pub fn config(&self) -> &KaratsubaConfig {
        &self.config
    }

    pub fn multiply(&self, x: &Natural, y: &Natural) -> Natural {
        self.multiply_traced(x, y, &mut ())
    }

    pub fn multiply_traced<T>(&self, x: &Natural, y: &Natural, tracer: &mut T) -> Natural
    where
        T: Tracer + ?Sized,
    {
        self.multiply_at(x, y, 0, tracer)
    }

    fn multiply_at<T>(&self, x: &Natural, y: &Natural, depth: usize, tracer: &mut T) -> Natural
    where
        T: Tracer + ?Sized,
    {
        let cutoff = self.config.base_case_digits();
        if x.digit_count() <= cutoff || y.digit_count() <= cutoff {
            let product = x.mul_schoolbook(y);
            tracer.base_case(depth, x, y, &product);
            return product;
        }

        let n = x.digit_count().max(y.digit_count());
        let m = n / 2;
        let (a, b) = x.split_at(m);
        let (c, d) = y.split_at(m);
        trace!("Splitting at depth {depth}: n={n}, m={m}");
        tracer.split(&Split {
            depth,
            x,
            y,
            m,
            a: &a,
            b: &b,
            c: &c,
            d: &d,
        });

        let ac = self.multiply_at(&a, &c, depth + 1, tracer);
        let bd = self.multiply_at(&b, &d, depth + 1, tracer);
        let a_plus_b = &a + &b;
        let c_plus_d = &c + &d;
        let sum_product = self.multiply_at(&a_plus_b, &c_plus_d, depth + 1, tracer);

        // (a + b)(c + d) = ac + ad + bc + bd, so this never underflows.
        let cross = sum_product.sub_assume_ge(&ac).sub_assume_ge(&bd);
        let result = &(&ac.shl_digits(2 * m) + &cross.shl_digits(m)) + &bd;

        tracer.combine(&Combine {
            depth,
            m,
            ac: &ac,
            bd: &bd,
            a_plus_b: &a_plus_b,
            c_plus_d: &c_plus_d,
            sum_product: &sum_product,
            cross: &cross,
            result: &result,
        });

        result
    }
}

/// Multiplies two naturals with the default configuration.
pub fn karatsuba_multiply(x: &Natural, y: &Natural) -> Natural {
    Karatsuba::default().multiply(x, y)
}

/// Plain long multiplication; the baseline Karatsuba is measured against.
pub fn schoolbook_multiply(x: &Natural, y: &Natural) -> Natural {
    x.mul_schoolbook(y)
}
