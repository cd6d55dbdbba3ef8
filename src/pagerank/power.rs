//! Power iteration solver
//!
//! Repeatedly left-multiplies a probability vector against the transition
//! model until the L1 distance between successive vectors drops to the
//! convergence threshold or the iteration budget runs out.

use crate::pagerank::transition::TransitionModel;

/// Power iteration over a [`TransitionModel`].
///
/// Parameters are validated by the [`PageRank`](crate::pagerank::PageRank)
/// front-end before the loop starts; the solver itself assumes a positive
/// `epsilon` and a positive iteration budget.
#[derive(Debug, Clone)]
pub struct PowerIteration {
    /// Convergence threshold on the L1 distance between successive vectors.
    pub epsilon: f64,
    /// Maximum number of iterations before returning the best-effort vector.
    pub max_iterations: usize,
}

/// Raw outcome of a power iteration run, in canonical node order.
#[derive(Debug, Clone)]
pub struct IterationOutcome {
    pub scores: Vec<f64>,
    pub iterations: usize,
    pub delta: f64,
    pub converged: bool,
}

impl PowerIteration {
    /// Run the iteration starting from the uniform distribution.
    ///
    /// Each step computes `next = current · M` (row vector against the
    /// row-stochastic matrix), redistributing probability mass along outgoing
    /// transitions. Terminates early once the L1 distance is `<= epsilon`.
    /// Hitting `max_iterations` is not a failure: the last vector is returned
    /// with `converged = false`. No renormalization is applied after the
    /// loop; floating-point drift is accepted as noise.
    pub fn run(&self, model: &TransitionModel) -> IterationOutcome {
        let n = model.n();
        let mut scores = vec![1.0 / n as f64; n];
        let mut next = vec![0.0; n];

        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.epsilon {
            iterations += 1;

            next.fill(0.0);
            for (i, &mass) in scores.iter().enumerate() {
                if mass == 0.0 {
                    continue;
                }
                for (j, &p) in model.row(i).iter().enumerate() {
                    next[j] += mass * p;
                }
            }

            delta = scores
                .iter()
                .zip(next.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut next);
        }

        let converged = delta <= self.epsilon;

        #[cfg(feature = "tracing")]
        tracing::debug!(iterations, delta, converged, "power iteration finished");

        IterationOutcome {
            scores,
            iterations,
            delta,
            converged,
        }
    }
}
