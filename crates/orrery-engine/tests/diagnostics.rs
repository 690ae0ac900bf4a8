//! Integration test: diagnostics reach the log.
//!
//! Every warning path emits exactly one `WARN` event carrying the
//! diagnostic text; successful operations emit none.

use orrery_core::{Particle, ParticleId};
use orrery_engine::{Simulation, SimulationConfig};
use orrery_space::{Boundary, BoxGeometry};
use orrery_test_utils::fixtures::line;
use orrery_test_utils::LogCapture;

fn captured<F: FnOnce()>(f: F) -> LogCapture {
    let capture = LogCapture::new();
    tracing::subscriber::with_default(capture.subscriber(), f);
    capture
}

fn unbounded() -> Simulation {
    Simulation::new(SimulationConfig::new(BoxGeometry::unbounded())).unwrap()
}

#[test]
fn clean_lifecycle_emits_no_warnings() {
    let log = captured(|| {
        let mut sim = unbounded();
        for p in line(4) {
            sim.add(p);
        }
        sim.remove(0, true).unwrap();
        sim.remove_by_id(ParticleId(3), false).unwrap();
        sim.remove_all();
    });
    assert!(log.warnings().is_empty(), "{:?}", log.warnings());
    // The store growth on the first add is still logged, at debug level.
    assert!(log.lines().iter().any(|l| l.contains("particle store grown")));
}

#[test]
fn outside_boundary_is_reported() {
    let log = captured(|| {
        let mut cfg = SimulationConfig::with_root_grid(5.0, 2, 2, 2).unwrap();
        cfg.boundary = Box::new(Boundary::Open);
        let mut sim = Simulation::new(cfg).unwrap();
        sim.add(Particle::at(0.0, 0.0, 0.0).with_id(1u32));
        sim.add(Particle::at(50.0, 0.0, 0.0).with_id(2u32));
    });
    let warnings = log.warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("did not add particle 2"));
    assert!(warnings[0].contains("outside box boundaries"));
}

#[test]
fn add_during_variational_is_reported() {
    let log = captured(|| {
        let mut sim = unbounded();
        sim.set_n_var(6);
        sim.add(Particle::default());
        assert_eq!(sim.len(), 1);
    });
    let warnings = log.warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("6 variational particles"));
}

#[test]
fn refused_removals_are_reported() {
    let log = captured(|| {
        let mut sim = unbounded();
        sim.add(Particle::default().with_id(1u32));
        assert!(sim.remove(0, true).is_err());
        assert!(sim.remove_by_id(ParticleId(77), true).is_err());
    });
    let warnings = log.warnings();
    assert_eq!(warnings.len(), 2);
    assert!(warnings[0].contains("refusing to remove the last particle"));
    assert!(warnings[1].contains("no particle with id 77"));
}
