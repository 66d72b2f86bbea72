use super::ActionError;
use crate::shared::fs_atomic::atomic_write_file;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const COVER_LETTER_FILE_NAME: &str = "Cover_Letter.md";

/// Fetch the job posting and reduce it to readable text. Fetch problems are
/// embedded in the returned text rather than raised, so the letter is still
/// produced and the user sees what went wrong inline.
pub fn fetch_job_details(url: &str, timeout: Duration) -> String {
    let response = match ureq::get(url).timeout(timeout).call() {
        Ok(response) => response,
        Err(err) => return format!("Error fetching job details: {err}"),
    };
    let html = match response.into_string() {
        Ok(html) => html,
        Err(err) => return format!("Error fetching job details: {err}"),
    };
    match html2text::from_read(html.as_bytes(), 80) {
        Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
        _ => "Job details could not be extracted.".to_string(),
    }
}

fn render_letter(job_text: &str, applicant_name: &str) -> String {
    format!(
        "# Cover Letter\n\n\
         Dear Hiring Team,\n\n\
         I am writing to express my interest in this opportunity. Based on the job \
         posting, here is what I understand about the role:\n\n\
         {job_text}\n\n\
         I believe my skills and background make me a strong fit, and I am excited \
         about the possibility of contributing value.\n\n\
         Best regards,\n\
         {applicant_name}\n"
    )
}

/// Scrape, render and persist the letter; returns the written path.
pub fn generate_cover_letter(
    job_url: &str,
    applicant_name: &str,
    output_dir: &Path,
    fetch_timeout: Duration,
) -> Result<PathBuf, ActionError> {
    let job_text = fetch_job_details(job_url, fetch_timeout);
    let letter = render_letter(&job_text, applicant_name);

    let output_path = output_dir.join(COVER_LETTER_FILE_NAME);
    fs::create_dir_all(output_dir).map_err(|source| ActionError::Write {
        path: output_dir.display().to_string(),
        source,
    })?;
    atomic_write_file(&output_path, letter.as_bytes()).map_err(|source| ActionError::Write {
        path: output_path.display().to_string(),
        source,
    })?;
    Ok(output_path)
}
