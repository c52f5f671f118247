use assert_cmd::Command;
use serde_json::{Value, json};
use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime};
use tempfile::TempDir;

#[derive(Debug)]
pub struct CompareRun {
    pub stdout: String,
    pub stderr: String,
    pub status: std::process::ExitStatus,
    pub duration: Duration,
    pub log_path: PathBuf,
}

impl CompareRun {
    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }
}

/// Scratch directory holding input files and per-run logs.
pub struct CompareWorkspace {
    pub temp_dir: TempDir,
    pub root: PathBuf,
    pub log_dir: PathBuf,
}

impl CompareWorkspace {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("temp dir");
        let root = temp_dir.path().to_path_buf();
        let log_dir = root.join("logs");
        fs::create_dir_all(&log_dir).expect("log dir");
        Self {
            temp_dir,
            root,
            log_dir,
        }
    }

    /// Write raw text to `name` inside the workspace.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.root.join(name);
        fs::write(&path, contents).expect("write file");
        path
    }

    /// Write a benchmark document with the given `(name, real_time, cpu_time)` rows.
    pub fn write_run(&self, name: &str, rows: &[(&str, f64, f64)]) -> PathBuf {
        let benchmarks: Vec<Value> = rows
            .iter()
            .map(|(bench, real, cpu)| {
                json!({
                    "name": bench,
                    "run_type": "aggregate",
                    "real_time": real,
                    "cpu_time": cpu,
                    "time_unit": "ns",
                })
            })
            .collect();
        let doc = json!({
            "context": {"host_name": "test", "num_cpus": 4},
            "benchmarks": benchmarks,
        });
        self.write(name, &serde_json::to_string_pretty(&doc).expect("serialize"))
    }
}

pub fn run_compare<I, S>(workspace: &CompareWorkspace, args: I, label: &str) -> CompareRun
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    run_compare_with_env(
        workspace,
        args,
        std::iter::empty::<(String, String)>(),
        label,
    )
}

pub fn run_compare_with_env<I, S, E, K, V>(
    workspace: &CompareWorkspace,
    args: I,
    env_vars: E,
    label: &str,
) -> CompareRun
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
    E: IntoIterator<Item = (K, V)>,
    K: AsRef<OsStr>,
    V: AsRef<OsStr>,
{
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bench-compare"));
    cmd.current_dir(&workspace.root);
    cmd.args(args);
    cmd.env_remove("BENCH_COMPARE_CONFIG");
    cmd.env_remove("BENCH_COMPARE_SAMPLE_SIZE");
    cmd.env_remove("BENCH_COMPARE_MIN_IMPROVEMENT");
    cmd.envs(env_vars);
    cmd.env("RUST_LOG", "bench_compare=debug");
    cmd.env("RUST_BACKTRACE", "1");

    let start = Instant::now();
    let output = cmd.output().expect("run bench-compare");
    let duration = start.elapsed();

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    let log_path = workspace.log_dir.join(format!("{label}.log"));
    let timestamp = SystemTime::now();
    let log_body = format!(
        "label: {label}\nstarted: {:?}\nduration: {:?}\nstatus: {}\nargs: {:?}\ncwd: {}\n\nstdout:\n{}\n\nstderr:\n{}\n",
        timestamp,
        duration,
        output.status,
        cmd.get_args().collect::<Vec<_>>(),
        workspace.root.display(),
        stdout,
        stderr
    );
    fs::write(&log_path, log_body).expect("write log");

    CompareRun {
        stdout,
        stderr,
        status: output.status,
        duration,
        log_path,
    }
}
