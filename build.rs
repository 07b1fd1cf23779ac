use std::cmp::Ordering;
use std::env;

// Packed f64 backends the crate knows how to drive
#[derive(PartialEq, Eq, Debug)]
struct CpuFeature {
    name: &'static str,
    arches: &'static [&'static str],
    cfg_flag: &'static str,
    detected: bool,
}

impl CpuFeature {
    // Lowest number == Highest Priority
    fn priority(&self) -> usize {
        match self.name {
            "sse2" => 0,
            "neon" => 1,
            _ => usize::MAX,
        }
    }

    fn features() -> Vec<CpuFeature> {
        vec![
            CpuFeature {
                name: "sse2",
                arches: &["x86", "x86_64"],
                cfg_flag: "sse2",
                detected: false,
            },
            CpuFeature {
                name: "neon",
                arches: &["aarch64"],
                cfg_flag: "neon",
                detected: false,
            },
        ]
    }
}

impl Ord for CpuFeature {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl PartialOrd for CpuFeature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Cargo exposes the features enabled for the *target*, which is what matters
// when cross-compiling; the host's /proc/cpuinfo is not consulted.
struct TargetDetector {
    arch: String,
    target_features: Vec<String>,
}

impl TargetDetector {
    fn from_env() -> Self {
        let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
        let target_features = env::var("CARGO_CFG_TARGET_FEATURE")
            .unwrap_or_default()
            .split(',')
            .map(|feature| feature.trim().to_lowercase())
            .filter(|feature| !feature.is_empty())
            .collect();

        Self {
            arch,
            target_features,
        }
    }

    fn detect_features(&self, features: &mut [CpuFeature]) {
        for feature in features.iter_mut() {
            feature.detected = feature.arches.contains(&self.arch.as_str())
                && self.target_features.iter().any(|f| f == feature.name);
        }
    }

    fn apply(features: &mut [CpuFeature]) {
        features.sort();

        // if no feature is detected, use the portable implementation
        let cfg_flag = features
            .iter()
            .find(|cpu_feature| cpu_feature.detected)
            .map(|cpu_feature| cpu_feature.cfg_flag)
            .unwrap_or("fallback");

        println!("cargo:rustc-cfg={cfg_flag}");

        println!("cargo::rustc-check-cfg=cfg(sse2)");
        println!("cargo::rustc-check-cfg=cfg(neon)");
        println!("cargo::rustc-check-cfg=cfg(fallback)");
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=CARGO_CFG_TARGET_FEATURE");

    let mut features = CpuFeature::features();

    TargetDetector::from_env().detect_features(&mut features);
    TargetDetector::apply(&mut features);
}
