// Matching engine: dimension similarity, competence/culture/formal scorers,
// weighted aggregation and narrative generation.
// Everything up to `engine` is pure and synchronous. `runner` and `store`
// carry the async side (loading profiles, upserting results).

pub mod competence;
pub mod culture;
pub mod dimension;
pub mod engine;
pub mod formal;
pub mod handlers;
pub mod narrative;
pub mod runner;
pub mod store;
pub mod weights;
