//! Property tests: tick accounting, purity, and run-to-run determinism.

use proptest::prelude::*;
use stratum_core::{ChannelId, Coord, Device, TickId};
use stratum_engine::{DeviceEdge, Environment, EnvironmentConfig, Extent};
use stratum_layers::{AlternatingFlow, BarCycle, HorizontalOscillation, UniformFlow};
use stratum_test_utils::{CountingScalar, CountingVector, StepCounter};

fn arb_edge() -> impl Strategy<Value = DeviceEdge> {
    prop_oneof![
        Just(DeviceEdge::Unbounded),
        Just(DeviceEdge::Clamp),
        Just(DeviceEdge::Wrap),
    ]
}

fn arb_devices() -> impl Strategy<Value = Vec<Device>> {
    prop::collection::vec(
        ((-50i32..150, -50i32..150), (-5i32..5, -5i32..5))
            .prop_map(|(pos, vel)| Device::moving(pos, vel)),
        0..12,
    )
}

/// A mixed environment with one time-varying motion layer.
fn build(devices: &[Device], edge: DeviceEdge, mid: i32) -> Environment {
    let mut cfg = EnvironmentConfig::rgb(Extent::new(100, 100));
    let bar = cfg.add_data_layer(BarCycle::new(10, 90, 255, 200).unwrap());
    cfg.bind(ChannelId::GREEN, bar).unwrap();
    cfg.add_motion_layer(HorizontalOscillation::new(mid));
    cfg.add_motion_layer(AlternatingFlow::new((1, 0), 5).unwrap());
    cfg.add_motion_layer(UniformFlow::new((0, 0)));
    cfg.devices = devices.to_vec();
    cfg.edge = edge;
    Environment::new(cfg).unwrap()
}

/// Environment with instrumented layers; returns the step counters.
fn counted(data: usize, motion: usize) -> (Environment, Vec<StepCounter>) {
    let mut cfg = EnvironmentConfig::rgb(Extent::new(8, 8));
    let mut counters = Vec::new();
    for i in 0..data {
        let layer = CountingScalar::new(format!("data{i}"));
        counters.push(layer.counter());
        cfg.add_data_layer(layer);
    }
    for i in 0..motion {
        let layer = CountingVector::new(format!("motion{i}"));
        counters.push(layer.counter());
        cfg.add_motion_layer(layer);
    }
    (Environment::new(cfg).unwrap(), counters)
}

proptest! {
    #[test]
    fn tick_equals_step_count(
        data in 0usize..4,
        motion in 1usize..4,
        steps in 0u64..60,
    ) {
        let (mut env, counters) = counted(data, motion);
        for _ in 0..steps {
            env.step();
        }
        prop_assert_eq!(env.current_tick(), TickId(steps));
        for c in &counters {
            prop_assert_eq!(c.get() as u64, steps);
        }
    }

    #[test]
    fn identical_runs_produce_identical_snapshots(
        devices in arb_devices(),
        edge in arb_edge(),
        mid in 0i32..100,
        steps in 1usize..80,
    ) {
        let mut a = build(&devices, edge, mid);
        let mut b = build(&devices, edge, mid);
        for _ in 0..steps {
            a.step();
            b.step();
            prop_assert_eq!(a.devices(), b.devices());
        }
    }

    #[test]
    fn repeated_queries_are_idempotent(
        devices in arb_devices(),
        steps in 0usize..40,
        x in any::<i32>(),
        y in any::<i32>(),
    ) {
        let mut env = build(&devices, DeviceEdge::Unbounded, 50);
        for _ in 0..steps {
            env.step();
        }
        let at = Coord::new(x, y);
        let samples = env.sample_all(at);
        let motion = env.motion_at(at);
        let snapshot = env.devices();
        for _ in 0..3 {
            prop_assert_eq!(env.sample_all(at), samples.clone());
            prop_assert_eq!(env.motion_at(at), motion);
            prop_assert_eq!(env.devices(), snapshot.clone());
        }
        prop_assert_eq!(env.current_tick(), TickId(steps as u64));
    }

    #[test]
    fn device_order_is_construction_order(devices in arb_devices()) {
        let env = build(&devices, DeviceEdge::Unbounded, 50);
        prop_assert_eq!(env.devices(), devices);
    }

    #[test]
    fn bounded_edges_confine_after_each_step(
        devices in arb_devices(),
        edge in prop_oneof![Just(DeviceEdge::Clamp), Just(DeviceEdge::Wrap)],
        steps in 1usize..50,
    ) {
        let mut env = build(&devices, edge, 50);
        for _ in 0..steps {
            env.step();
            for d in env.devices() {
                prop_assert!(env.extent().contains(d.position.x, d.position.y));
            }
        }
    }
}
