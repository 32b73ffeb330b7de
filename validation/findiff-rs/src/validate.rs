use findiff_rs::prelude::*;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Serialize)]
struct ValidationData {
    name: String,
    notes: String,
    input: InputData,
    reference: ReferenceData,
    #[serde(skip_deserializing)]
    result: ResultData,
}

#[derive(Debug, Deserialize, Serialize)]
struct InputData {
    x: Vec<f64>,
    f: Vec<f64>,
}

#[derive(Debug, Deserialize, Serialize)]
struct ReferenceData {
    dfdx: Vec<f64>,
}

#[derive(Debug, Deserialize, Serialize, Default)]
struct ResultData {
    dfdx: Vec<f64>,
    max_abs_error: f64,
    error: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let input_dir = Path::new("../output/reference");
    let output_dir = Path::new("../output/findiff_rs");

    if !input_dir.exists() {
        eprintln!(
            "Input directory {:?} does not exist. Generate the reference cases first.",
            input_dir
        );
        return Ok(());
    }

    fs::create_dir_all(output_dir)?;

    let mut worst: Option<(String, f64)> = None;

    for entry in fs::read_dir(input_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            println!("Processing {:?}", path.file_name().unwrap_or_default());
            let (name, discrepancy) = process_file(&path, output_dir)?;
            if worst.as_ref().is_none_or(|(_, w)| discrepancy > *w) {
                worst = Some((name, discrepancy));
            }
        }
    }

    if let Some((name, discrepancy)) = worst {
        println!("Largest discrepancy: {:e} ({})", discrepancy, name);
    }

    Ok(())
}

fn process_file(input_path: &Path, output_dir: &Path) -> Result<(String, f64), Box<dyn Error>> {
    let file = fs::File::open(input_path)?;
    let mut data: ValidationData = serde_json::from_reader(file)?;

    // A rejected case is recorded rather than aborting the run
    match fd2(&data.input.x, &data.input.f) {
        Ok(dfdx) => {
            let norms = ErrorNorms::compute(&dfdx, &data.reference.dfdx)?;
            data.result.dfdx = dfdx;
            data.result.max_abs_error = norms.max_abs;
        }
        Err(err) => {
            data.result.max_abs_error = f64::NAN;
            data.result.error = Some(err.to_string());
        }
    }

    let output_path = output_dir.join(input_path.file_name().unwrap_or_default());
    let output_json = serde_json::to_string_pretty(&data)?;
    fs::write(output_path, output_json)?;

    Ok((data.name, data.result.max_abs_error))
}
