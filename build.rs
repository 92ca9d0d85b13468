#[cfg(feature = "desktop")]
const COMMANDS: &[&str] = &["set_props", "update_field", "get_state", "submit", "cancel"];

fn main() {
    // Generates the allow-*/deny-* permissions and the ACL manifest host apps pick up
    #[cfg(feature = "desktop")]
    tauri_plugin::Builder::new(COMMANDS).build();
}
