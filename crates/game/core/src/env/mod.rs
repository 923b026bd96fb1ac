//! Traits describing read-only content tables.
//!
//! Oracles expose the static tables (items, NPCs, enemies, areas, world map,
//! interaction trees). The [`Env`] aggregate bundles them so the reducer can
//! reach everything it needs without hard coupling to concrete
//! implementations. Every oracle is optional; lookups against a missing
//! oracle surface as [`OracleError`] and callers fail soft.
mod areas;
mod enemies;
mod error;
mod interactions;
mod items;
mod npcs;
mod world;

pub use areas::{
    Area, AreaKind, AreaOracle, EntryPoint, Exit, ExitTarget, Placement, Room, TileKind,
};
pub use enemies::{EnemyDefinition, EnemyOracle};
pub use error::OracleError;
pub use interactions::InteractionOracle;
pub use items::{ItemDefinition, ItemKind, ItemOracle};
pub use npcs::{NpcDefinition, NpcOracle};
pub use world::{WorldLocation, WorldOracle};

/// Aggregates read-only oracles required by the reducer and the session.
#[derive(Clone, Copy, Debug)]
pub struct Env<'a, I, N, E, A, W, X>
where
    I: ItemOracle + ?Sized,
    N: NpcOracle + ?Sized,
    E: EnemyOracle + ?Sized,
    A: AreaOracle + ?Sized,
    W: WorldOracle + ?Sized,
    X: InteractionOracle + ?Sized,
{
    items: Option<&'a I>,
    npcs: Option<&'a N>,
    enemies: Option<&'a E>,
    areas: Option<&'a A>,
    world: Option<&'a W>,
    interactions: Option<&'a X>,
}

/// Type-erased environment used throughout the reducer and session.
pub type GameEnv<'a> = Env<
    'a,
    dyn ItemOracle + 'a,
    dyn NpcOracle + 'a,
    dyn EnemyOracle + 'a,
    dyn AreaOracle + 'a,
    dyn WorldOracle + 'a,
    dyn InteractionOracle + 'a,
>;

impl<'a, I, N, E, A, W, X> Env<'a, I, N, E, A, W, X>
where
    I: ItemOracle + ?Sized,
    N: NpcOracle + ?Sized,
    E: EnemyOracle + ?Sized,
    A: AreaOracle + ?Sized,
    W: WorldOracle + ?Sized,
    X: InteractionOracle + ?Sized,
{
    pub fn new(
        items: Option<&'a I>,
        npcs: Option<&'a N>,
        enemies: Option<&'a E>,
        areas: Option<&'a A>,
        world: Option<&'a W>,
        interactions: Option<&'a X>,
    ) -> Self {
        Self {
            items,
            npcs,
            enemies,
            areas,
            world,
            interactions,
        }
    }

    pub fn with_all(
        items: &'a I,
        npcs: &'a N,
        enemies: &'a E,
        areas: &'a A,
        world: &'a W,
        interactions: &'a X,
    ) -> Self {
        Self::new(
            Some(items),
            Some(npcs),
            Some(enemies),
            Some(areas),
            Some(world),
            Some(interactions),
        )
    }

    pub fn empty() -> Self {
        Self {
            items: None,
            npcs: None,
            enemies: None,
            areas: None,
            world: None,
            interactions: None,
        }
    }

    /// Returns the item oracle, or an error if not available.
    pub fn items(&self) -> Result<&'a I, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }

    /// Returns the NPC oracle, or an error if not available.
    pub fn npcs(&self) -> Result<&'a N, OracleError> {
        self.npcs.ok_or(OracleError::NpcsNotAvailable)
    }

    /// Returns the enemy oracle, or an error if not available.
    pub fn enemies(&self) -> Result<&'a E, OracleError> {
        self.enemies.ok_or(OracleError::EnemiesNotAvailable)
    }

    /// Returns the area oracle, or an error if not available.
    pub fn areas(&self) -> Result<&'a A, OracleError> {
        self.areas.ok_or(OracleError::AreasNotAvailable)
    }

    /// Returns the world oracle, or an error if not available.
    pub fn world(&self) -> Result<&'a W, OracleError> {
        self.world.ok_or(OracleError::WorldNotAvailable)
    }

    /// Returns the interaction oracle, or an error if not available.
    pub fn interactions(&self) -> Result<&'a X, OracleError> {
        self.interactions.ok_or(OracleError::InteractionsNotAvailable)
    }
}

impl<'a, I, N, E, A, W, X> Env<'a, I, N, E, A, W, X>
where
    I: ItemOracle + Sized + 'a,
    N: NpcOracle + Sized + 'a,
    E: EnemyOracle + Sized + 'a,
    A: AreaOracle + Sized + 'a,
    W: WorldOracle + Sized + 'a,
    X: InteractionOracle + Sized + 'a,
{
    /// Erases the concrete oracle types.
    pub fn into_game_env(self) -> GameEnv<'a> {
        let items: Option<&'a dyn ItemOracle> = self.items.map(|items| items as _);
        let npcs: Option<&'a dyn NpcOracle> = self.npcs.map(|npcs| npcs as _);
        let enemies: Option<&'a dyn EnemyOracle> = self.enemies.map(|enemies| enemies as _);
        let areas: Option<&'a dyn AreaOracle> = self.areas.map(|areas| areas as _);
        let world: Option<&'a dyn WorldOracle> = self.world.map(|world| world as _);
        let interactions: Option<&'a dyn InteractionOracle> =
            self.interactions.map(|interactions| interactions as _);
        Env::new(items, npcs, enemies, areas, world, interactions)
    }
}
