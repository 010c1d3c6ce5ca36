use std::env;
use std::fs::{create_dir_all, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{Duration, Local, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;

const DOCTORS: [(&str, &str, &str); 3] = [
    ("Dr. Tripic", "MILJAN TRIPIC", "Kitchener"),
    ("Dr. Cartagena", "CARTAGENA MEDICINE", "Waterloo"),
    ("Dr. Singh", "SINGH CLINIC", "Waterloo")
];
const RATES: [u32; 6] = [600, 660, 720, 770, 840, 900];
const EXPENSE_TYPES: [&str; 4] = ["Supplies", "Parking", "Software", "Travel"];
const PROBABILITY_MALFORMED: f64 = 0.02;

struct GeneratorConfig {
    weeks: i64,
    output_dir: PathBuf
}

impl GeneratorConfig {
    fn from_args() -> Self {
        let args: Vec<String> = env::args().collect();
        let weeks = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(52);
        let output_dir = args.get(2).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("samples/generated"));

        Self { weeks, output_dir }
    }
}

fn main() -> io::Result<()> {
    let config = GeneratorConfig::from_args();
    let today = Local::now().date_naive();
    let mut rng = rand::thread_rng();

    println!("Generating {} weeks of sheets in {}...", config.weeks, config.output_dir.display());

    create_dir_all(&config.output_dir)?;

    write_payments(&config.output_dir, today, config.weeks, &mut rng)?;
    write_schedule(&config.output_dir, today, &mut rng)?;
    write_expenses(&config.output_dir, today, config.weeks, &mut rng)?;
    write_locations(&config.output_dir)?;

    println!("Done.");

    Ok(())
}

fn create(directory: &Path, name: &str) -> io::Result<BufWriter<File>> {
    Ok(BufWriter::new(File::create(directory.join(name))?))
}

fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn pick_doctor<R: Rng>(rng: &mut R) -> (&'static str, &'static str, &'static str) {
    *DOCTORS.choose(rng).unwrap_or(&DOCTORS[0])
}

fn pick_rate<R: Rng>(rng: &mut R) -> u32 {
    *RATES.choose(rng).unwrap_or(&RATES[0])
}

fn write_payments<R: Rng>(directory: &Path, today: NaiveDate, weeks: i64, rng: &mut R) -> io::Result<()> {
    let mut writer = create(directory, "Payments.csv")?;

    writeln!(writer, "Date,Sender,Amount,Doctor,Status")?;

    for week in (1..=weeks).rev() {
        let date = today - Duration::weeks(week) + Duration::days(rng.gen_range(0..5));
        let (doctor, sender, _) = pick_doctor(rng);

        //NOTE: A few malformed cells keep the normalizer's fallbacks exercised
        let amount = if rng.gen_bool(PROBABILITY_MALFORMED) {
            "N/A".to_string()
        } else {
            format!("${}.00", pick_rate(rng))
        };

        writeln!(writer, "{},{},{},{},Auto-Logged", format_date(date), sender, amount, doctor)?;
    }

    writer.flush()
}

fn write_schedule<R: Rng>(directory: &Path, today: NaiveDate, rng: &mut R) -> io::Result<()> {
    let mut writer = create(directory, "Master_Income.csv")?;

    writeln!(writer, "Date,Doctor,Type,Rate,Amount,Status")?;

    for week in -8..=12 {
        let date = today + Duration::weeks(week);
        let (doctor, _, _) = pick_doctor(rng);
        let status = match week {
            w if w < -4 => "✓ Paid",
            w if w <= 0 => "⏳ Pending",
            _ => "📊 Projected"
        };

        writeln!(writer, "{},{},Scheduled Work,Est. Lump Sum,{},{}", format_date(date), doctor, pick_rate(rng), status)?;
    }

    writer.flush()
}

fn write_expenses<R: Rng>(directory: &Path, today: NaiveDate, weeks: i64, rng: &mut R) -> io::Result<()> {
    let mut writer = create(directory, "Expenses.csv")?;

    writeln!(writer, "Date,Doctor / Location,Patients Seen / Type,Total Earned")?;

    for _ in 0..weeks / 2 {
        let date = today - Duration::days(rng.gen_range(0..weeks * 7));
        let (doctor, _, _) = pick_doctor(rng);
        let kind = EXPENSE_TYPES.choose(rng).unwrap_or(&EXPENSE_TYPES[0]);
        let cents: u32 = rng.gen_range(1_000..25_000);

        writeln!(writer, "{},{},{},${}.{:02}", format_date(date), doctor, kind, cents / 100, cents % 100)?;
    }

    writer.flush()
}

fn write_locations(directory: &Path) -> io::Result<()> {
    let mut writer = create(directory, "locations.csv")?;

    writeln!(writer, "location,doctor")?;

    for (doctor, _, location) in DOCTORS {
        writeln!(writer, "{location},{doctor}")?;
    }

    writer.flush()
}
