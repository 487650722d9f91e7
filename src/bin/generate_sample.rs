use anyhow::{Context, Result};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

const FIRST_YEAR: i32 = 1900;
const LAST_YEAR: i32 = 2020;

/// (country, starting GDP per capita, mean yearly growth)
const COUNTRIES: &[(&str, f64, f64)] = &[
    ("USA", 4_000.0, 0.020),
    ("UK", 4_500.0, 0.017),
    ("Japan", 1_200.0, 0.028),
    ("Germany", 3_000.0, 0.020),
    ("Brazil", 700.0, 0.022),
    ("India", 600.0, 0.021),
    ("China", 550.0, 0.030),
    ("Chad", 450.0, 0.010),
    ("Norway", 2_000.0, 0.024),
    ("Argentina", 2_800.0, 0.013),
];

/// Multiplicative random walk from a starting level.
fn generate_series(start: f64, growth: f64, years: usize, rng: &mut SimpleRng) -> Vec<f64> {
    let mut value = start;
    (0..years)
        .map(|_| {
            let step = rng.gauss(growth, 0.02);
            value *= 1.0 + step;
            value = value.max(100.0);
            value
        })
        .collect()
}

/// Format a value the way the gapminder export does: plain digits below
/// 10 000, a `k`-suffixed token above (`12512.3` → `"12.5k"`).
fn format_value(value: f64) -> String {
    if value >= 10_000.0 {
        format!("{:.1}k", value / 1_000.0)
    } else {
        format!("{:.0}", value)
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let years: Vec<i32> = (FIRST_YEAR..=LAST_YEAR).collect();

    let output_path = "gdp_pcap_sample.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    let mut header: Vec<String> = vec!["country".to_string()];
    header.extend(years.iter().map(|y| y.to_string()));
    writer.write_record(&header).context("writing header")?;

    for &(country, start, growth) in COUNTRIES {
        let series = generate_series(start, growth, years.len(), &mut rng);
        let mut record: Vec<String> = vec![country.to_string()];
        record.extend(series.iter().map(|&v| format_value(v)));
        writer
            .write_record(&record)
            .with_context(|| format!("writing row for {country}"))?;
    }

    writer.flush().context("flushing CSV")?;

    println!(
        "Wrote {} countries x {} years to {output_path}",
        COUNTRIES.len(),
        years.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_generation_is_deterministic() {
        let mut a = SimpleRng::new(42);
        let mut b = SimpleRng::new(42);
        assert_eq!(
            generate_series(1_000.0, 0.02, 50, &mut a),
            generate_series(1_000.0, 0.02, 50, &mut b)
        );
    }

    #[test]
    fn values_stay_positive() {
        let mut rng = SimpleRng::new(7);
        let series = generate_series(150.0, 0.0, 200, &mut rng);
        assert!(series.iter().all(|&v| v >= 100.0));
    }

    #[test]
    fn large_values_get_the_k_suffix() {
        assert_eq!(format_value(12_512.3), "12.5k");
        assert_eq!(format_value(985.4), "985");
        assert!(!format_value(9_999.0).ends_with('k'));
    }
}
