use super::load_bond_force;
use crate::cli::InspectArgs;
use crate::error::Result;
use bondkit::core::forcefield::force::Force;
use std::fmt::Write;

pub fn run(args: InspectArgs) -> Result<()> {
    let force = Force::from(load_bond_force(&args.params)?);
    print!("{}", render(&force));
    Ok(())
}

fn render(force: &Force) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Force:        {} ({})", force.name(), force.kind());
    let _ = writeln!(out, "Force group:  {}", force.force_group());
    let _ = writeln!(
        out,
        "Periodic:     {}",
        if force.uses_periodic_boundary_conditions() {
            "yes"
        } else {
            "no"
        }
    );
    let Some(bonds) = force.as_harmonic_bond() else {
        return out;
    };
    let _ = writeln!(out, "Bonds:        {}", bonds.num_bonds());

    if bonds.is_empty() {
        return out;
    }

    let _ = writeln!(
        out,
        "\n{:>6}  {:>10}  {:>10}  {:>14}  {:>14}",
        "Index", "Particle A", "Particle B", "Length", "k"
    );
    for (index, bond) in bonds.bonds().iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>6}  {:>10}  {:>10}  {:>14.6}  {:>14.6}",
            index, bond.particle_a, bond.particle_b, bond.length, bond.k
        );
    }
    out
}
