//! Built-in ability effect implementations.

pub mod area_denial;
pub mod buff;
pub mod melee_swing;
pub mod projectile;

pub use area_denial::AreaDenialEffect;
pub use buff::BuffEffect;
pub use melee_swing::MeleeSwingEffect;
pub use projectile::ProjectileEffect;
