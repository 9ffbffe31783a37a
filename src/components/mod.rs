//! ECS components for entities.
//!
//! Submodules overview:
//! - [`animation`] – playback state for named sprite clips
//! - [`boxcollider`] – axis-aligned rectangular collider for overlap checks
//! - [`button`] – clickable controls and frame cycling dials
//! - [`dynamictext`] – text component for rendering variable strings
//! - [`group`] – tag component for grouping entities by name
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`persistent`] – marker for entities that survive a scene reset
//! - [`rigidbody`] – simple kinematic body storing velocity
//! - [`rotation`] – rotation angle in degrees
//! - [`scale`] – 2D scale factor for sprites
//! - [`sensor`] – sensor zones, locomotive and wagon markers
//! - [`shape`] – untextured rectangles and track polylines
//! - [`signalbinding`] – binds texts to world signals
//! - [`sprite`] – 2D sprite rendering component
//! - [`timer`] – countdown timer that emits events when finished
//! - [`waypointfollower`] – moves an entity along a list of points
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod animation;
pub mod boxcollider;
pub mod button;
pub mod dynamictext;
pub mod group;
pub mod mapposition;
pub mod persistent;
pub mod rigidbody;
pub mod rotation;
pub mod scale;
pub mod sensor;
pub mod shape;
pub mod signalbinding;
pub mod sprite;
pub mod timer;
pub mod waypointfollower;
pub mod zindex;
