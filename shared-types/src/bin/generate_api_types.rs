use shared_types::*;
use std::fs;
use std::path::Path;
use ts_rs::TS;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate TypeScript definitions for the profile UI
    let mut types = Vec::new();

    // Document types
    types.push(clean_type(DocumentFormat::export_to_string()?));

    // Mission types
    types.push(clean_type(CandidateMission::export_to_string()?));
    types.push(clean_type(CanonicalMission::export_to_string()?));

    // Analysis types
    types.push(clean_type(GeneralInfo::export_to_string()?));
    types.push(clean_type(AnalysisResult::export_to_string()?));
    types.push(clean_type(AnalysisWarning::export_to_string()?));
    types.push(clean_type(AnalysisOutcome::export_to_string()?));

    let output_dir = Path::new("../gui/src/api-types");
    fs::create_dir_all(output_dir)?;

    let output_path = output_dir.join("types.ts");
    let output = types.join("\n\n");

    fs::write(&output_path, output)?;
    println!("Generated TypeScript types in {}", output_path.display());

    Ok(())
}

fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    // All types land in one file, so cross-type imports are dropped
    let filtered: Vec<&str> = type_def
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("import type")
                && !trimmed.starts_with("// This file was generated")
                && !trimmed.starts_with("/* This file was generated")
        })
        .collect();

    let result = filtered.join("\n").trim().to_string();
    if result.is_empty() {
        result
    } else {
        format!("{}\n", result)
    }
}
