//! Benchmark workloads for the Respawn object pool.
//!
//! Provides a [`Particle`] instance type whose construction allocates,
//! a [`ParticleFactory`] for it, and [`churn_script`], a deterministic
//! spawn/despawn sequence seeded through ChaCha8.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use respawn_core::{FactoryError, InstanceFactory, InstanceId, Poolable};
use respawn_pool::{Pool, PoolConfig};

/// Size of the per-particle trail buffer, in f32 elements.
pub const TRAIL_LEN: usize = 256;

/// A short-lived simulation object with a heap-allocated trail.
#[derive(Clone, Debug)]
pub struct Particle {
    pub position: [f32; 3],
    pub velocity: [f32; 3],
    pub trail: Vec<f32>,
}

impl Poolable for Particle {
    type Placement = ([f32; 3], [f32; 3]);

    fn place(&mut self, (position, velocity): Self::Placement) {
        self.position = position;
        self.velocity = velocity;
    }

    fn reset(&mut self) {
        self.trail.fill(0.0);
    }
}

/// Builds particles, paying for the trail allocation every time.
#[derive(Clone, Debug, Default)]
pub struct ParticleFactory;

impl InstanceFactory for ParticleFactory {
    type Kind = u32;
    type Instance = Particle;

    fn create(&mut self, _kind: &u32) -> Result<Particle, FactoryError> {
        Ok(Particle {
            position: [0.0; 3],
            velocity: [0.0; 3],
            trail: vec![0.0; TRAIL_LEN],
        })
    }
}

/// One step of a churn workload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChurnOp {
    /// Acquire a new instance.
    Spawn,
    /// Release the live instance at this index (modulo live count).
    Despawn(usize),
}

/// Generate a deterministic spawn/despawn sequence.
///
/// Spawns while fewer than `max_live` instances are live and despawns
/// otherwise, with a coin flip in between. Same seed, same script.
pub fn churn_script(seed: u64, len: usize, max_live: usize) -> Vec<ChurnOp> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut live = 0usize;
    let mut ops = Vec::with_capacity(len);
    for _ in 0..len {
        let roll = rng.next_u32();
        let spawn = live == 0 || (live < max_live && roll % 2 == 0);
        if spawn {
            live += 1;
            ops.push(ChurnOp::Spawn);
        } else {
            live -= 1;
            ops.push(ChurnOp::Despawn(rng.next_u32() as usize));
        }
    }
    ops
}

/// Run a churn script against a pool, returning the handles still live.
///
/// # Panics
///
/// Panics if the pool refuses an acquire or a release, which a pool from
/// [`particle_pool`] never does.
pub fn run_churn(pool: &mut Pool<ParticleFactory>, script: &[ChurnOp]) -> Vec<InstanceId> {
    let mut live = Vec::new();
    for op in script {
        match *op {
            ChurnOp::Spawn => {
                let id = pool
                    .acquire(([1.0, 2.0, 3.0], [0.0, 1.0, 0.0]))
                    .expect("unbounded particle pool never refuses an acquire");
                live.push(id);
            }
            ChurnOp::Despawn(pick) => {
                if !live.is_empty() {
                    let id = live.swap_remove(pick % live.len());
                    pool.release(id).expect("live handle is active in its pool");
                }
            }
        }
    }
    live
}

/// A particle pool sized for `max_live` concurrent instances.
pub fn particle_pool(max_live: usize, growth_batch: usize) -> Pool<ParticleFactory> {
    Pool::new(ParticleFactory, 0, PoolConfig::new(max_live, growth_batch))
        .expect("ParticleFactory never fails")
}
