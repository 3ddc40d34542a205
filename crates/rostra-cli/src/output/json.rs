use rostra_core::audit::AuditResult;
use rostra_core::error::RosterError;

pub fn print(result: &AuditResult) -> Result<(), RosterError> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}
