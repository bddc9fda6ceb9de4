//! Enhance command: single images and batch directories.

use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use solstretch_cli::{
    build_preset, determine_output_path, expand_inputs, parse_output_format, process_single_image,
    EnhanceArgs, ProcessingParams,
};

/// Run the enhancement pipeline over a file or directory.
#[allow(clippy::too_many_arguments)]
pub fn cmd_enhance(
    input: PathBuf,
    out: Option<PathBuf>,
    args: EnhanceArgs,
    export: String,
    recursive: bool,
    threads: Option<usize>,
    silent: bool,
    verbose: bool,
) -> Result<(), String> {
    let batch_start = Instant::now();

    // Set verbose mode for core library
    solstretch_core::config::set_verbose(verbose);

    let export = parse_output_format(&export)?;
    let preset = build_preset(&args)?;

    // Expand directories to file lists
    let inputs = expand_inputs(&[input], recursive)?;
    if inputs.is_empty() {
        return Err(
            "No supported image files found (supported: .jpg, .jpeg, .tif, .tiff)".to_string(),
        );
    }

    // Single file: process inline, no thread pool
    if inputs.len() == 1 {
        let input = &inputs[0];
        let output_path = determine_output_path(input, &out, export)?;
        let params = ProcessingParams {
            preset,
            export,
            silent,
        };

        process_single_image(input, &output_path, &params)?;
        if !silent {
            println!(
                "Enhanced {} -> {} ({:.2}s)",
                input.display(),
                output_path.display(),
                batch_start.elapsed().as_secs_f64()
            );
        }
        return Ok(());
    }

    if !silent {
        println!("Found {} image files to process", inputs.len());
    }

    // Configure thread pool if specified
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        if !silent {
            println!("Using {} threads for parallel processing", num_threads);
        }
    }

    // Ensure the output directory exists before workers race to write into it
    if let Some(out_dir) = &out {
        if !out_dir.exists() {
            std::fs::create_dir_all(out_dir)
                .map_err(|e| format!("Failed to create output directory: {}", e))?;
        }
    }

    // Per-image parameters; suppress per-image chatter in batch mode
    let params = ProcessingParams {
        preset,
        export,
        silent: true,
    };

    let processed_count = AtomicUsize::new(0);
    let total_files = inputs.len();

    // Process files in parallel; each image runs the pipeline sequentially
    let results: Vec<Result<PathBuf, String>> = inputs
        .par_iter()
        .map(|input| {
            let file_start = Instant::now();

            let output_path = determine_output_path(input, &out, export)?;
            process_single_image(input, &output_path, &params)?;

            let count = processed_count.fetch_add(1, Ordering::SeqCst) + 1;
            if !silent {
                println!(
                    "[{}/{}] {} -> {} ({:.2}s)",
                    count,
                    total_files,
                    input.display(),
                    output_path.display(),
                    file_start.elapsed().as_secs_f64()
                );
            }

            Ok(output_path)
        })
        .collect();

    // Summarize results
    let mut success_count = 0;
    let mut errors: Vec<(PathBuf, String)> = Vec::new();
    for (input, result) in inputs.iter().zip(results) {
        match result {
            Ok(_) => success_count += 1,
            Err(e) => errors.push((input.clone(), e)),
        }
    }

    if !silent {
        println!(
            "\nProcessed {}/{} files in {:.2}s",
            success_count,
            total_files,
            batch_start.elapsed().as_secs_f64()
        );
    }

    if !errors.is_empty() {
        for (path, error) in &errors {
            eprintln!("  {}: {}", path.display(), error);
        }
        return Err(format!("{} file(s) failed", errors.len()));
    }

    Ok(())
}
