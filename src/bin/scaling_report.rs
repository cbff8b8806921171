use std::env;
use std::time::Instant;

use pareto_frontier::algorithms::all_algorithms;
use pareto_frontier::analysis::{Sample, ScalingFit};
use pareto_frontier::generate::{generate_points, GenerationMode};
use pareto_frontier::point::sort_canonical;
use pareto_frontier::{InputOrder, ParetoAlgorithm, Point};
use rand::{rngs::StdRng, SeedableRng};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

const DEFAULT_SIZES: &[usize] = &[100, 500, 1000, 2000, 4000, 8000, 16000, 32000];

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("scaling_report: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Pareto Frontier Scaling Report");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("Each algorithm is timed on growing inputs and fitted against its");
    eprintln!("theoretical complexity term:");
    eprintln!("  • {} input for the sorting algorithms", options.mode);
    eprintln!("  • presorted input with random y for the presorted sweep");
    eprintln!("  • outputs are cross-checked and verified against a brute-force");
    eprintln!("    baseline up to n = {}", options.verify_limit);
    eprintln!();
    eprintln!("{}", "=".repeat(80));
    eprintln!();

    let mut sys = System::new();
    let mut rng = StdRng::seed_from_u64(options.seed);
    let algorithms = all_algorithms();
    let mut measurements = Vec::new();

    let total = options.sizes.len();
    for (idx, &n) in options.sizes.iter().enumerate() {
        eprintln!("[{}/{}] n = {n}", idx + 1, total);
        let unsorted = generate_points(n, options.mode, &mut rng);
        let mut presorted = generate_points(n, GenerationMode::PresortedRandomY, &mut rng);
        sort_canonical(&mut presorted);

        let mut unsorted_reference: Option<Vec<Point>> = None;
        let mut presorted_reference: Option<Vec<Point>> = None;
        for algorithm in &algorithms {
            let (mode, input, reference) = match algorithm.input_order() {
                InputOrder::Unsorted => (options.mode, &unsorted, &mut unsorted_reference),
                InputOrder::SortedByX => (
                    GenerationMode::PresortedRandomY,
                    &presorted,
                    &mut presorted_reference,
                ),
            };
            let m = measure(&**algorithm, mode, input, &options, &mut sys, reference);
            let status_icon = match m.verification_status {
                VerificationStatus::Passed => "✓",
                VerificationStatus::Failed => "✗",
                VerificationStatus::NotChecked => "○",
            };
            eprintln!(
                "      {} {:<16} h={:<7} time={:>10.0}us status={}",
                status_icon,
                m.algorithm,
                m.h,
                m.elapsed_us,
                m.verification_status.label()
            );
            measurements.push(m);
        }
        eprintln!();
    }

    let fits: Vec<(&dyn ParetoAlgorithm, ScalingFit)> = algorithms
        .iter()
        .map(|algorithm| {
            let samples: Vec<Sample> = measurements
                .iter()
                .filter(|m| m.algorithm == algorithm.name())
                .map(|m| Sample {
                    n: m.n,
                    h: m.h,
                    elapsed_us: m.elapsed_us,
                })
                .collect();
            let algorithm: &dyn ParetoAlgorithm = &**algorithm;
            (algorithm, ScalingFit::fit(algorithm.complexity(), &samples))
        })
        .collect();

    for (position, (algorithm, fit)) in fits.iter().enumerate() {
        print_fit_table(position + 1, *algorithm, fit);
    }
    for m in &mut measurements {
        if let Some((_, fit)) = fits.iter().find(|(a, _)| a.name() == m.algorithm) {
            m.k_avg = fit.k_avg;
            m.adjusted_us = fit.k_avg * fit.complexity.theoretical(m.n, m.h);
        }
    }

    let failed = measurements
        .iter()
        .filter(|m| matches!(m.verification_status, VerificationStatus::Failed))
        .count();
    if failed == 0 {
        eprintln!("✓ All checked outputs match the brute-force baseline.");
    } else {
        eprintln!("✗ {failed} run(s) failed verification. Please review the errors above.");
    }
    eprintln!();

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("scaling_report output error: {err}");
        std::process::exit(1);
    }
    if failed > 0 {
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    mode: GenerationMode,
    sizes: Vec<usize>,
    seed: u64,
    verify_limit: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut mode = GenerationMode::WorstCaseDescending;
        let mut sizes = DEFAULT_SIZES.to_vec();
        let mut seed = 42u64;
        let mut verify_limit = 2000usize;

        while let Some(arg) = args.next() {
            let arg: String = arg.into();
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) => (flag.to_string(), Some(value.to_string())),
                None => (arg, None),
            };
            let mut value = |name: &str| -> Result<String, String> {
                match &inline {
                    Some(v) => Ok(v.clone()),
                    None => args
                        .next()
                        .map(Into::into)
                        .ok_or_else(|| format!("missing value after {name}")),
                }
            };
            match flag.as_str() {
                "--help" | "-h" => {
                    Options::print_help();
                    std::process::exit(0);
                }
                "--format" => format = OutputFormat::from_str(&value("--format")?)?,
                "--mode" => {
                    let label = value("--mode")?;
                    mode = GenerationMode::from_label(&label)
                        .ok_or_else(|| format!("unknown mode '{label}'"))?
                }
                "--sizes" => sizes = parse_sizes(&value("--sizes")?)?,
                "--seed" => {
                    seed = value("--seed")?
                        .parse::<u64>()
                        .map_err(|_| "seed must be a non-negative integer".to_string())?
                }
                "--verify-limit" => {
                    verify_limit = value("--verify-limit")?
                        .parse::<usize>()
                        .map_err(|_| "verify limit must be a positive integer".to_string())?
                }
                _ => return Err(format!("unrecognized argument '{flag}'")),
            }
        }

        Ok(Self {
            format,
            mode,
            sizes,
            seed,
            verify_limit,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --release --bin scaling_report [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --mode <worst_case|random|presorted>
                                Input shape for the sorting algorithms (default: worst_case)
  --sizes <n1,n2,...>           Input sizes (default: 100,500,1000,2000,4000,8000,16000,32000)
  --seed <u64>                  Seed for the presorted generator (default: 42)
  --verify-limit <N>            Largest n verified against the brute-force baseline (default: 2000)
  -h, --help                    Print this help message

Examples:
  cargo run --release --bin scaling_report
  cargo run --release --bin scaling_report -- --format table --sizes 1000,10000,100000
"
        );
    }
}

fn parse_sizes(value: &str) -> Result<Vec<usize>, String> {
    let sizes = value
        .split(',')
        .map(|s| {
            s.trim()
                .parse::<usize>()
                .map_err(|_| format!("invalid size '{s}'"))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if sizes.is_empty() {
        return Err("at least one size is required".to_string());
    }
    Ok(sizes)
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

#[derive(Clone)]
struct Measurement {
    algorithm: &'static str,
    complexity: &'static str,
    mode: GenerationMode,
    n: usize,
    h: usize,
    elapsed_us: f64,
    k_avg: f64,
    adjusted_us: f64,
    rss_delta_kib: u64,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

#[derive(Clone, Copy)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }
}

/// Time one algorithm on one input and verify its output.
///
/// Outputs of the algorithms that share one input are compared against the
/// first one seen (`reference`); small inputs are also checked against the
/// brute-force frontier.
fn measure(
    algorithm: &dyn ParetoAlgorithm,
    mode: GenerationMode,
    input: &[Point],
    options: &Options,
    sys: &mut System,
    reference: &mut Option<Vec<Point>>,
) -> Measurement {
    let before = rss_kib(sys);
    let start = Instant::now();
    let result = algorithm.compute(input);
    let elapsed = start.elapsed();
    let after = rss_kib(sys);

    let (h, status, detail) = match result {
        Err(err) => (0, VerificationStatus::Failed, Some(err.to_string())),
        Ok(frontier) => {
            let h = frontier.len();
            let (status, detail) = verify(&frontier, input, options, reference);
            (h, status, detail)
        }
    };

    Measurement {
        algorithm: algorithm.name(),
        complexity: algorithm.complexity().label(),
        mode,
        n: input.len(),
        h,
        elapsed_us: elapsed.as_secs_f64() * 1e6,
        k_avg: 0.0,
        adjusted_us: 0.0,
        rss_delta_kib: after.saturating_sub(before),
        verification_status: status,
        verification_detail: detail,
    }
}

fn verify(
    frontier: &[Point],
    input: &[Point],
    options: &Options,
    reference: &mut Option<Vec<Point>>,
) -> (VerificationStatus, Option<String>) {
    if let Some(expected) = reference.as_ref() {
        if expected.as_slice() != frontier {
            return (
                VerificationStatus::Failed,
                Some(format!(
                    "differs from first algorithm: h={} vs h={}",
                    frontier.len(),
                    expected.len()
                )),
            );
        }
    } else {
        *reference = Some(frontier.to_vec());
    }
    if input.len() > options.verify_limit {
        return (VerificationStatus::NotChecked, None);
    }
    let baseline = brute_force_frontier(input);
    if baseline.as_slice() == frontier {
        (VerificationStatus::Passed, None)
    } else {
        (
            VerificationStatus::Failed,
            Some(format!(
                "expected h={}, got h={}",
                baseline.len(),
                frontier.len()
            )),
        )
    }
}

fn print_fit_table(position: usize, algorithm: &dyn ParetoAlgorithm, fit: &ScalingFit) {
    eprintln!("{}", "=".repeat(105));
    eprintln!(
        "--- Algorithm {position}: {} ({} Analysis) ---",
        algorithm.title(),
        fit.complexity
    );
    eprintln!("Calculated Average Scaling Constant (K_avg): {:.8}", fit.k_avg);
    eprintln!("{}", "-".repeat(105));
    eprintln!(
        "{:<10}{:<10}{:<25}{:<25}{:<30}",
        "N", "H", "Exp. Time (us)", "Theoretical Value", "Adj. Theoretical Result (us)"
    );
    eprintln!("{}", "-".repeat(105));
    for row in &fit.rows {
        eprintln!(
            "{:<10}{:<10}{:<25.0}{:<25.2}{:<30.2}",
            row.n, row.h, row.experimental_us, row.theoretical, row.adjusted_us
        );
    }
    eprintln!("{}", "-".repeat(105));
    eprintln!(
        "{:<10}{:<10}{:<25.0}{:<25.2}",
        "Average ->",
        "",
        fit.mean_experimental_us(),
        fit.mean_theoretical()
    );
    eprintln!("{}", "=".repeat(105));
    eprintln!();
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!(
        "algorithm,complexity,input,n,h,time_us,k_avg,adjusted_us,rss_delta_kib,verification_status,verification_detail"
    );
    for m in measurements {
        let detail = m
            .verification_detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},\"{}\",{},{},{},{:.0},{:.8},{:.2},{},{},\"{}\"",
            m.algorithm,
            m.complexity,
            m.mode,
            m.n,
            m.h,
            m.elapsed_us,
            m.k_avg,
            m.adjusted_us,
            m.rss_delta_kib,
            m.verification_status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let mut col1 = "algorithm".len();
    let mut col2 = "complexity".len();
    for m in measurements {
        col1 = col1.max(m.algorithm.len());
        col2 = col2.max(m.complexity.len());
    }

    println!(
        "{:<col1$}  {:<col2$}  {:>8}  {:>8}  {:>12}  {:>14}  {:>14}  {:>12}  {}",
        "algorithm",
        "complexity",
        "n",
        "h",
        "time_us",
        "adjusted_us",
        "rss_delta_kib",
        "status",
        "detail",
        col1 = col1,
        col2 = col2
    );
    println!(
        "{:-<col1$}  {:-<col2$}  {:-<8}  {:-<8}  {:-<12}  {:-<14}  {:-<14}  {:-<12}  {:-<12}",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        "",
        col1 = col1,
        col2 = col2
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:<col2$}  {:>8}  {:>8}  {:>12.0}  {:>14.2}  {:>14}  {:>12}  {}",
            m.algorithm,
            m.complexity,
            m.n,
            m.h,
            m.elapsed_us,
            m.adjusted_us,
            m.rss_delta_kib,
            m.verification_status.label(),
            m.verification_detail
                .as_ref()
                .map(|s| s.as_str())
                .unwrap_or(""),
            col1 = col1,
            col2 = col2
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = m.verification_detail.as_ref().map(|s| s.replace('"', "'"));
        println!(
            "  {{\"algorithm\":\"{}\",\"complexity\":\"{}\",\"input\":\"{}\",\"n\":{},\"h\":{},\"time_us\":{:.0},\"k_avg\":{:.8},\"adjusted_us\":{:.2},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.algorithm,
            m.complexity,
            m.mode,
            m.n,
            m.h,
            m.elapsed_us,
            m.k_avg,
            m.adjusted_us,
            m.rss_delta_kib,
            m.verification_status.label(),
            match detail {
                Some(ref d) => format!("\"{d}\""),
                None => "null".to_string(),
            },
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}

/// Quadratic reference: keep each point no other point dominates, one copy
/// per distinct point, in canonical order.
fn brute_force_frontier(points: &[Point]) -> Vec<Point> {
    let mut frontier: Vec<Point> = points
        .iter()
        .filter(|p| !points.iter().any(|q| q.dominates(p)))
        .copied()
        .collect();
    sort_canonical(&mut frontier);
    frontier.dedup();
    frontier
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_defaults_to_worst_case() {
        let options = Options::parse(Vec::<String>::new().into_iter()).unwrap();
        assert_eq!(options.mode, GenerationMode::WorstCaseDescending);
    }

    #[test]
    fn mode_flag_accepts_labels() {
        let options = Options::parse(["--mode", "random"].into_iter()).unwrap();
        assert_eq!(options.mode, GenerationMode::Random);
        let options = Options::parse(["--mode=presorted", "--seed", "7"].into_iter()).unwrap();
        assert_eq!(options.mode, GenerationMode::PresortedRandomY);
        assert_eq!(options.seed, 7);
        assert_eq!(
            Options::parse(["--mode", "sideways"].into_iter()).err(),
            Some("unknown mode 'sideways'".to_string())
        );
    }

    #[test]
    fn brute_force_handles_signed_zeros() {
        let input = [Point::new(-0.0, 1.0), Point::new(0.0, 0.0)];
        assert_eq!(brute_force_frontier(&input), vec![Point::new(-0.0, 1.0)]);
    }
}
