use crate::entities::{Instance, Solution};
use crate::eval;
use crate::io::ext_repr::{ExtInstance, ExtLevel, ExtRect, ExtSolution};
use itertools::izip;
use std::time::Instant;

/// Exports a solution out of the library
pub fn export(instance: &Instance, solution: &Solution, epoch: Instant) -> ExtSolution {
    let levels = izip!(
        &solution.levels,
        solution.base_heights(instance),
        solution.level_heights(instance),
        solution.level_lengths(instance)
    )
    .map(|(items, base_height, height, used_length)| ExtLevel {
        base_height,
        height,
        used_length,
        items: items.clone(),
    })
    .collect();

    ExtSolution {
        cost: eval::cost(instance, solution),
        total_height: solution.total_height(instance),
        feasible: eval::is_feasible(instance, solution),
        levels,
        run_time_sec: epoch.elapsed().as_secs(),
    }
}

/// Converts an instance back into its external representation
pub fn export_instance(instance: &Instance, name: &str) -> ExtInstance {
    ExtInstance {
        name: name.to_string(),
        recipient_length: instance.recipient_length,
        rects: instance
            .rects
            .iter()
            .map(|r| ExtRect {
                length: r.length,
                height: r.height,
                weight: r.weight,
            })
            .collect(),
    }
}
