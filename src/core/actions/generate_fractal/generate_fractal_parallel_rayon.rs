use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Each row is computed by exactly one worker into its own vector; rows are
/// joined in order once every worker has finished, so the output matches
/// [`generate_fractal_serial`](super::generate_fractal_serial::generate_fractal_serial)
/// element for element.
pub fn generate_fractal_parallel_rayon<Alg>(
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
{
    let resolution = algorithm.resolution();
    let width = resolution.width();

    let rows: Result<Vec<Vec<Alg::Success>>, Alg::Failure> = (0..resolution.height())
        .into_par_iter()
        .map(|y| {
            (0..width)
                .map(|x| algorithm.compute(Point { x, y }))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect();

    rows.map(|r| r.into_iter().flatten().collect())
}
