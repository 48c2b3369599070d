use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use vitals_core::{build_vitals_series, DiagnosisEntry, PatientProfile, RangeWindow};
use vitals_patient::{find_patient, parse_roster_str};

#[derive(Parser, Debug)]
#[command(
    name = "vitals-cli",
    about = "In chuỗi huyết áp của một bệnh nhân từ roster JSON."
)]
struct Args {
    /// Đường dẫn tới file roster JSON.
    #[arg(short, long, conflicts_with = "url")]
    input: Option<PathBuf>,

    /// Endpoint roster HTTP, xác thực Basic bằng --user/--pass.
    #[arg(long)]
    url: Option<String>,

    /// Tài khoản Basic auth cho --url.
    #[arg(long, default_value = "")]
    user: String,

    /// Mật khẩu Basic auth cho --url.
    #[arg(long, default_value = "")]
    pass: String,

    /// Tên bệnh nhân; mặc định lấy người đầu tiên trong roster.
    #[arg(short, long)]
    patient: Option<String>,

    /// Khoảng thời gian: 1, 15 hoặc 2; giá trị lạ nghĩa là không giới hạn.
    #[arg(short, long, default_value = "1")]
    range: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let roster = load_roster(&args)?;
    let patient = match &args.patient {
        Some(name) => find_patient(&roster, name)
            .with_context(|| format!("Không tìm thấy bệnh nhân {name:?} trong roster"))?,
        None => roster.first().context("Roster không có bệnh nhân nào")?,
    };

    println!("Bệnh nhân: {}", patient.name);
    if let Some(gender) = &patient.gender {
        println!("Giới tính: {gender}");
    }
    if let Some(date_of_birth) = &patient.date_of_birth {
        println!("Ngày sinh: {date_of_birth}");
    }
    println!("Số bản ghi chẩn đoán: {}", patient.diagnosis_history.len());

    let range = RangeWindow::from_selector(&args.range);
    match build_vitals_series(Some(&patient.diagnosis_history), range) {
        Some(series) => {
            println!();
            println!("{:<12} {:>9} {:>9}", "Tháng", "Systolic", "Diastolic");
            for ((label, systolic), diastolic) in series
                .labels
                .iter()
                .zip(&series.systolic)
                .zip(&series.diastolic)
            {
                println!("{label:<12} {systolic:>9.0} {diastolic:>9.0}");
            }
            println!(
                "\nChỉ số hiện tại: {:.0}/{:.0} ({} / {})",
                series.current.systolic.value,
                series.current.diastolic.value,
                series.current.systolic.levels.as_deref().unwrap_or("--"),
                series.current.diastolic.levels.as_deref().unwrap_or("--"),
            );
        }
        None => println!("\nChưa có dữ liệu huyết áp để vẽ."),
    }

    print_latest_vitals(patient.diagnosis_history.first());

    Ok(())
}

fn load_roster(args: &Args) -> anyhow::Result<Vec<PatientProfile>> {
    if let Some(url) = &args.url {
        return vitals_patient::remote::fetch_roster(url, &args.user, &args.pass)
            .with_context(|| format!("Không tải được roster từ {url}"));
    }

    let Some(input) = &args.input else {
        bail!("Cần --input <file> hoặc --url <endpoint>");
    };
    let data = std::fs::read_to_string(input)
        .with_context(|| format!("Không đọc được file {input:?}"))?;
    parse_roster_str(&data).context("Không parse được roster")
}

fn print_latest_vitals(entry: Option<&DiagnosisEntry>) {
    let Some(entry) = entry else {
        return;
    };

    println!("\nChỉ số gần nhất:");
    for (label, reading, unit) in [
        ("Nhịp thở", entry.respiratory_rate.as_ref(), "bpm"),
        ("Nhiệt độ", entry.temperature.as_ref(), "°F"),
        ("Nhịp tim", entry.heart_rate.as_ref(), "bpm"),
    ] {
        let Some(reading) = reading else { continue };
        let Some(value) = reading.value else { continue };
        println!(
            "  {label}: {value} {unit} ({})",
            reading.levels.as_deref().unwrap_or("--")
        );
    }
}
