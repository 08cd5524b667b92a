use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use base64::Engine;
use showcase_core::contact::Attachment;
use showcase_core::form::{ContactForm, MAX_ATTACHMENT_BYTES};
use showcase_engine::{ClientSettings, ContactSubmitter, ReqwestContactClient};
use showcase_logging::{showcase_info, showcase_warn};

use crate::cli::ContactArgs;

/// Fills the form from flags, walking the steps so each one validates.
pub fn fill_form(args: &ContactArgs) -> Result<ContactForm> {
    let mut form = ContactForm::new();
    form.name = args.name.clone();
    form.email = args.email.trim().to_string();
    form.phone = args.phone.clone().unwrap_or_default();
    if let Some(service) = &args.service {
        form.service = service.clone();
    }
    form.advance().context("contact details")?;

    if let Some(budget) = args.budget {
        form.budget = budget;
    }
    form.deadline = args.deadline.clone().unwrap_or_default();
    form.urgency = args.urgency;
    form.advance().context("project details")?;

    form.message = args.message.clone();
    if let Some(path) = &args.attach {
        form.attach(read_attachment(path)?)
            .with_context(|| format!("attachment {path:?}"))?;
    }
    Ok(form)
}

/// Reads a file into an inline attachment. Oversized files keep their size
/// but no payload so the form can reject them.
pub fn read_attachment(path: &Path) -> Result<Attachment> {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| anyhow!("attachment path has no file name: {path:?}"))?;
    let size = fs::metadata(path)
        .with_context(|| format!("failed to stat {path:?}"))?
        .len();
    let base64 = if size > MAX_ATTACHMENT_BYTES {
        None
    } else {
        let bytes = fs::read(path).with_context(|| format!("failed to read {path:?}"))?;
        Some(base64::engine::general_purpose::STANDARD.encode(bytes))
    };
    Ok(Attachment {
        mime_type: mime_type_for(&name).to_string(),
        name,
        size,
        base64,
    })
}

fn mime_type_for(name: &str) -> &'static str {
    let extension = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "txt" => "text/plain",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "zip" => "application/zip",
        _ => "application/octet-stream",
    }
}

/// Submits once. The form is reset on success and kept on failure.
pub async fn submit_contact(args: ContactArgs) -> Result<String> {
    let mut form = fill_form(&args)?;
    let client = ReqwestContactClient::new(&args.base_url, ClientSettings::default())
        .context("contact endpoint")?;

    let submission = form.begin_submit()?;
    showcase_info!("Submitting contact form to {}", client.endpoint());
    let result = client.submit(&submission).await;
    form.finish_submit(result.is_ok());

    match result {
        Ok(message) => Ok(message),
        Err(err) => {
            showcase_warn!("Contact submission failed: {}", err);
            Err(err.into())
        }
    }
}
