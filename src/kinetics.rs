// kinetics.rs
// Arrhenius rate law for N2 + 3H2 <-> 2NH3. Pure functions of the current
// state; all integration happens in the simulation module.

use crate::config;

/// Forward rate constant k_f = A_f * exp(-Ea_f / T), with R treated as 1 in
/// this scaled model.
pub fn k_fwd(temperature: f32) -> f32 {
    config::K_FWD_PRE * (-config::EA_FWD / temperature).exp()
}

/// Reverse rate constant k_r = A_r * exp(-Ea_r / T).
pub fn k_rev(temperature: f32) -> f32 {
    config::K_REV_PRE * (-config::EA_REV / temperature).exp()
}

/// Instantaneous net reaction rate (forward minus reverse). Positive values
/// produce NH3, negative values decompose it.
///
/// Concentrations are clamped at zero before exponentiation: integration
/// overshoot can leave tiny negative values, and a negative base under a
/// fractional power is NaN. Requires `temperature > 0`, guaranteed by the
/// input boundary.
pub fn net_rate(n2: f32, h2: f32, nh3: f32, temperature: f32) -> f32 {
    let safe_n2 = n2.max(0.0);
    let safe_h2 = h2.max(0.0);
    let safe_nh3 = nh3.max(0.0);

    let forward = k_fwd(temperature) * safe_n2 * safe_h2.powf(config::H2_RATE_ORDER);
    let reverse = k_rev(temperature) * safe_nh3.powf(config::NH3_RATE_ORDER);

    forward - reverse
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_is_deterministic() {
        let a = net_rate(1.5, 1.5, 0.5, 1.2);
        let b = net_rate(1.5, 1.5, 0.5, 1.2);
        assert_eq!(a, b);
    }

    #[test]
    fn negative_inputs_are_clamped_not_nan() {
        let r = net_rate(-1.0e-6, -1.0e-6, -1.0e-6, 1.0);
        assert!(r.is_finite());
        assert_eq!(r, 0.0);
    }

    #[test]
    fn forward_dominates_reactant_rich_mixture_at_low_temp() {
        assert!(net_rate(1.5, 1.5, 0.5, 1.0) > 0.0);
    }

    #[test]
    fn heating_shifts_rate_toward_reactants() {
        // Exothermic reaction: the reverse constant grows faster with T, so
        // the net rate must drop as temperature rises.
        let cold = net_rate(1.0, 1.0, 1.5, 1.0);
        let hot = net_rate(1.0, 1.0, 1.5, 3.0);
        assert!(hot < cold);

        // Holds for a reactant-rich mixture as well.
        let cold = net_rate(1.5, 1.5, 0.5, 1.0);
        let hot = net_rate(1.5, 1.5, 0.5, 3.0);
        assert!(hot < cold);
    }

    #[test]
    fn reverse_activation_energy_exceeds_forward() {
        // The ordering the whole demo rests on.
        assert!(crate::config::EA_REV > crate::config::EA_FWD);
        // And at the top of the temperature range the reverse constant
        // actually dominates.
        assert!(k_rev(3.0) > k_fwd(3.0));
    }
}
