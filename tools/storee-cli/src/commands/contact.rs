//! Contact link.

use anyhow::Result;
use storee_sdk::storee_commerce::whatsapp::ContactRequest;

use super::ContactArgs;
use crate::context::Context;

/// Run the contact command.
pub async fn run(args: ContactArgs, ctx: &Context) -> Result<()> {
    let contact = ContactRequest::new(args.name, args.phone, args.message);
    contact.validate()?;

    let link = ctx.whatsapp();
    let url = link.contact_url(&contact);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "message": contact.message(link.brand()),
            "url": url,
        }));
        return Ok(());
    }

    ctx.output.header("Contact message");
    for line in contact.message(link.brand()).lines() {
        ctx.output.info(line);
    }
    ctx.output.success(&url);
    Ok(())
}
