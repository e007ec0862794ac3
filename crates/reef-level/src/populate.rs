//! Turn a level document into an initial population.
//!
//! Agent order, which is also the wire order of every snapshot:
//!
//! 1. explicit `fish` placements, in document order;
//! 2. random interactive fish up to `numberOfFish`, species from the palette;
//! 3. `numberOfBgFish` background fish of `backgroundSpecies`.

use reef_agent::{AgentRngs, AgentStore, AgentStoreBuilder, Spawn};
use reef_core::{SimRng, SpeciesId, Vec2};

use crate::LevelDocument;

/// Mixed into the run seed for the placement stream so it is not the same
/// stream as agent 0's RNG.
const PLACEMENT_SALT: u64 = 0x6a09_e667_f3bc_c909;

/// Spawn list for `level`.  Random positions and species come from a
/// [`SimRng`] derived from `seed`.
pub fn spawns(level: &LevelDocument, seed: u64) -> Vec<Spawn> {
    let mut rng = SimRng::new(seed ^ PLACEMENT_SALT);
    let palette = level.palette();
    let world_max = Vec2::new(level.world_width, level.world_height);

    let mut out = Vec::with_capacity(level.population());

    for p in &level.fish {
        let mut spawn = Spawn::interactive(p.position(), SpeciesId(p.species));
        if let Some(v) = p.velocity() {
            spawn = spawn.with_velocity(v);
        }
        out.push(spawn);
    }

    let random_fish = (level.number_of_fish as usize).saturating_sub(level.fish.len());
    for _ in 0..random_fish {
        let position = rng.point_in(Vec2::ZERO, world_max);
        let species = rng.choose(&palette).copied().unwrap_or_default();
        out.push(Spawn::interactive(position, species));
    }

    let bg = level.background_bounds();
    for _ in 0..level.number_of_bg_fish {
        let position = rng.point_in(bg.min, bg.max);
        out.push(Spawn::background(position, SpeciesId(level.background_species)));
    }

    out
}

/// Builder preloaded with the level's spawn parameters and population.
pub fn populate(level: &LevelDocument, seed: u64) -> AgentStoreBuilder {
    AgentStoreBuilder::new(seed)
        .defaults(level.agent_defaults())
        .spawn_all(spawns(level, seed))
}

/// Shorthand for `populate(level, seed).build()`.
pub fn build_population(level: &LevelDocument, seed: u64) -> (AgentStore, AgentRngs) {
    populate(level, seed).build()
}
