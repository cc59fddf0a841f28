//! Account registration.

use agrilink_market::account::{BuyerRegistration, FarmerRegistration, Registration};
use anyhow::{bail, Result};
use dialoguer::{Confirm, Input, Password};

use super::{ContactArgs, RegisterArgs, RegisterCommand};
use crate::context::Context;

/// Run the register command.
pub fn run(args: RegisterArgs, ctx: &Context) -> Result<()> {
    let prompter = Prompter {
        interactive: !args.no_input && !ctx.output.is_json(),
    };

    let form = build_form(args.command, args.accept_terms, &prompter)?;
    let role = form.role();
    let account = form.validate()?;

    if ctx.output.is_json() {
        ctx.output.json(&account);
        return Ok(());
    }

    ctx.output.success(&format!(
        "Welcome to Agrilink, {}! Your {} account is ready.",
        account.display_name, role
    ));
    ctx.output.kv("Account", account.id.as_str());
    ctx.output.kv("Email", &account.email);
    ctx.output.kv("Location", &account.location);
    Ok(())
}

fn build_form(
    command: RegisterCommand,
    accept_terms: bool,
    prompter: &Prompter,
) -> Result<Registration> {
    let form = match command {
        RegisterCommand::Buyer {
            contact,
            company,
            business_type,
        } => {
            let contact = prompter.contact(contact)?;
            Registration::Buyer(BuyerRegistration {
                first_name: contact.first_name,
                last_name: contact.last_name,
                email: contact.email,
                phone: contact.phone,
                location: contact.location,
                company: prompter.optional(company, "Company")?,
                business_type: prompter.optional(business_type, "Business type")?,
                password: contact.password,
                confirm_password: contact.confirm_password,
                accepted_terms: prompter.terms(accept_terms)?,
            })
        }
        RegisterCommand::Farmer {
            contact,
            farm_name,
            primary_crops,
            farm_size,
            farming_method,
            experience,
            description,
        } => {
            let contact = prompter.contact(contact)?;
            Registration::Farmer(FarmerRegistration {
                first_name: contact.first_name,
                last_name: contact.last_name,
                email: contact.email,
                phone: contact.phone,
                location: contact.location,
                farm_name: prompter.required(farm_name, "Farm name")?,
                primary_crops: prompter.required(primary_crops, "Primary crops")?,
                farm_size: prompter.optional(farm_size, "Farm size")?,
                farming_method: prompter.optional(farming_method, "Farming method")?,
                experience: prompter.optional(experience, "Years of experience")?,
                description: prompter.optional(description, "About your farm")?,
                password: contact.password,
                confirm_password: contact.confirm_password,
                accepted_terms: prompter.terms(accept_terms)?,
            })
        }
    };
    Ok(form)
}

/// Contact fields after prompting.
struct Contact {
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    location: String,
    password: String,
    confirm_password: String,
}

/// Fills missing fields from the terminal, or leaves them blank for validation to report.
struct Prompter {
    interactive: bool,
}

impl Prompter {
    fn contact(&self, args: ContactArgs) -> Result<Contact> {
        let first_name = self.required(args.first_name, "First name")?;
        let last_name = self.required(args.last_name, "Last name")?;
        let email = self.required(args.email, "Email")?;
        let phone = self.required(args.phone, "Phone")?;
        let location = self.required(args.location, "Location")?;

        let (password, confirm_password) = match (args.password, args.confirm_password) {
            (Some(password), Some(confirm)) => (password, confirm),
            (Some(password), None) => (password.clone(), password),
            (None, confirm) => {
                let password = self.secret("Password")?;
                let confirm = match confirm {
                    Some(confirm) => confirm,
                    None => self.secret("Confirm password")?,
                };
                (password, confirm)
            }
        };

        Ok(Contact {
            first_name,
            last_name,
            email,
            phone,
            location,
            password,
            confirm_password,
        })
    }

    fn required(&self, value: Option<String>, prompt: &str) -> Result<String> {
        match value {
            Some(value) => Ok(value),
            None if self.interactive => Ok(Input::<String>::new()
                .with_prompt(prompt)
                .interact_text()?),
            None => Ok(String::new()),
        }
    }

    fn optional(&self, value: Option<String>, prompt: &str) -> Result<String> {
        match value {
            Some(value) => Ok(value),
            None if self.interactive => Ok(Input::<String>::new()
                .with_prompt(format!("{} (optional)", prompt))
                .allow_empty(true)
                .interact_text()?),
            None => Ok(String::new()),
        }
    }

    fn secret(&self, prompt: &str) -> Result<String> {
        if !self.interactive {
            bail!("--password is required with --no-input");
        }
        Ok(Password::new().with_prompt(prompt).interact()?)
    }

    fn terms(&self, accepted: bool) -> Result<bool> {
        if accepted || !self.interactive {
            return Ok(accepted);
        }
        Ok(Confirm::new()
            .with_prompt("I agree to the Terms of Service and Privacy Policy")
            .default(false)
            .interact()?)
    }
}
