use crate::explosion::Explosion;
use crate::model::RootPose;

/// What the model needs from whatever owns the visible scene.
///
/// Explosions are addressed by their slot in the model's explosion list; the
/// whole list is torn down together on reset.
pub trait SceneHost {
    fn attach_model(&mut self, root: &RootPose);
    fn detach_model(&mut self);
    fn spawn_explosion(&mut self, slot: usize, explosion: &Explosion);
    fn destroy_explosion(&mut self, slot: usize);
}
