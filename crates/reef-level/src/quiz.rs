//! Quiz highlight selection.
//!
//! A question may ask the player about one kind of fish.  The quiz
//! component picks one interactive fish of that kind, preferring one that is
//! comfortably on screen, and flips its highlight flag.  Highlighting never
//! touches kinematics.

use reef_agent::AgentStore;
use reef_core::{AgentId, Layer, Rect, SpeciesId};

use crate::Question;

/// Fraction of the world width on each side treated as off-screen when
/// choosing a fish to highlight.
const VISIBLE_FROM: f64 = 0.05;
const VISIBLE_TO: f64 = 0.85;

/// Species for the colour names used in `fishToHighlight`.
///
/// A bare integer is accepted as a species id.  Empty or unknown names
/// yield `None`.
pub fn species_for_color(color: &str) -> Option<SpeciesId> {
    let id = match color.trim().to_ascii_lowercase().as_str() {
        "green"  => 72,
        "pink"   => 74,
        "blue"   => 76,
        "red"    => 78,
        "orange" => 80,
        "brown"  => 100,
        other    => return other.parse().ok().map(SpeciesId),
    };
    Some(SpeciesId(id))
}

/// First interactive fish of `species` in the visible band of the world,
/// falling back to any interactive fish of that species.
pub fn pick_highlight(agents: &AgentStore, species: SpeciesId, world_width: f64) -> Option<AgentId> {
    let interactive = |a: &AgentId| agents.layer[a.index()] == Layer::Interactive;
    let band = Rect::new(
        world_width * VISIBLE_FROM,
        f64::NEG_INFINITY,
        world_width * VISIBLE_TO,
        f64::INFINITY,
    );
    agents
        .matching(species, band)
        .find(interactive)
        .or_else(|| {
            agents
                .agent_ids()
                .filter(|a| agents.species[a.index()] == species)
                .find(interactive)
        })
}

/// Highlight the fish `question` asks about.  Returns the chosen agent, or
/// `None` if the question names no fish or none of that kind exist.
pub fn highlight_for(agents: &mut AgentStore, question: &Question, world_width: f64) -> Option<AgentId> {
    let species = species_for_color(&question.fish_to_highlight)?;
    let agent = pick_highlight(agents, species, world_width)?;
    agents.set_highlighted(agent, true).ok()?;
    Some(agent)
}
