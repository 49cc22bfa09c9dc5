use rand::rngs::StdRng;
use rand::Rng;
use scalargrad_core::Scalar;

#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Random expression tree over a fixed number of inputs.
///
/// Every node stays differentiable on its whole domain except `Relu`, whose
/// kink is reached only when an operand is exactly zero.
#[derive(Debug, Clone)]
pub enum Expr {
    Input(usize),
    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    /// `lhs / (rhs² + 1)`
    SafeDiv(Box<Expr>, Box<Expr>),
    Scale(Box<Expr>, f64),
    Shift(Box<Expr>, f64),
    Neg(Box<Expr>),
    Square(Box<Expr>),
    Sin(Box<Expr>),
    Cos(Box<Expr>),
    /// `exp(sin(u))`
    BoundedExp(Box<Expr>),
    /// `log(u² + 1)`
    SafeLog(Box<Expr>),
    Relu(Box<Expr>),
}

impl Expr {
    #[allow(dead_code)]
    pub fn random(rng: &mut StdRng, num_inputs: usize, depth: usize, allow_relu: bool) -> Expr {
        if depth == 0 || rng.gen_bool(0.2) {
            return Expr::Input(rng.gen_range(0..num_inputs));
        }
        let sub = |rng: &mut StdRng| Box::new(Expr::random(rng, num_inputs, depth - 1, allow_relu));
        let choices = if allow_relu { 13 } else { 12 };
        match rng.gen_range(0..choices) {
            0 => Expr::Add(sub(rng), sub(rng)),
            1 => Expr::Sub(sub(rng), sub(rng)),
            2 => Expr::Mul(sub(rng), sub(rng)),
            3 => Expr::SafeDiv(sub(rng), sub(rng)),
            4 => Expr::Scale(sub(rng), rng.gen_range(-3.0..3.0)),
            5 => Expr::Shift(sub(rng), rng.gen_range(-3.0..3.0)),
            6 => Expr::Neg(sub(rng)),
            7 => Expr::Square(sub(rng)),
            8 => Expr::Sin(sub(rng)),
            9 => Expr::Cos(sub(rng)),
            10 => Expr::BoundedExp(sub(rng)),
            11 => Expr::SafeLog(sub(rng)),
            _ => Expr::Relu(sub(rng)),
        }
    }

    pub fn eval<S: Scalar>(&self, inputs: &[S]) -> S {
        match self {
            Expr::Input(i) => inputs[*i].clone(),
            Expr::Add(a, b) => a.eval(inputs) + b.eval(inputs),
            Expr::Sub(a, b) => a.eval(inputs) - b.eval(inputs),
            Expr::Mul(a, b) => a.eval(inputs) * b.eval(inputs),
            Expr::SafeDiv(a, b) => a.eval(inputs) / (b.eval(inputs).powf(2.0) + 1.0),
            Expr::Scale(a, k) => a.eval(inputs) * *k,
            Expr::Shift(a, k) => a.eval(inputs) + *k,
            Expr::Neg(a) => -a.eval(inputs),
            Expr::Square(a) => a.eval(inputs).powf(2.0),
            Expr::Sin(a) => a.eval(inputs).sin(),
            Expr::Cos(a) => a.eval(inputs).cos(),
            Expr::BoundedExp(a) => a.eval(inputs).sin().exp(),
            Expr::SafeLog(a) => (a.eval(inputs).powf(2.0) + 1.0).log(),
            Expr::Relu(a) => a.eval(inputs).relu(),
        }
    }
}

#[allow(dead_code)]
pub fn random_inputs(rng: &mut StdRng, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.gen_range(-2.0..2.0)).collect()
}
