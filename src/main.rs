use inline_colorization::*;

use cepex_session::client::{ApiClient, LoginProvider};
use cepex_session::config::{load_config, print_schema};
use cepex_session::guard::{AccessGuard, Decision};
use cepex_session::session::Session;
use cepex_session::storage::create_storage;
use cepex_session::token::decode_claims;
use cepex_session::utils::init_logging;

/// Prints who the session currently belongs to, if anyone.
fn report_session(session: &Session) {
    match session.identity() {
        Some(identity) => {
            let mut roles: Vec<&str> = identity.roles.iter().map(String::as_str).collect();
            roles.sort_unstable();
            println!(
                "  👤 Logged in as {style_bold}{color_green}{}{style_reset}{color_reset} (id {})",
                identity.login, identity.id
            );
            println!("  🎭 Roles: {}", roles.join(", "));
            if let Some(claims) = session.token().and_then(|t| decode_claims(t).ok()) {
                if let Some(expires_at) = claims.expires_at() {
                    println!("  ⏳ Token expires at {}", expires_at.to_rfc3339());
                }
            }
        }
        None => println!("  🚪 Logged out"),
    }
}

/// Prints the guard decision for every configured route, with the redirect
/// target where the navigation would be turned away.
fn report_routes(guard: &AccessGuard, session: &Session) {
    println!();
    println!("{style_bold}{color_cyan}Route decisions{style_reset}{color_reset}");
    for rule in guard.rules() {
        let decision = guard.evaluate_path(session, &rule.path);
        let colored = match decision {
            Decision::Allow => format!("{color_green}{decision}{color_reset}"),
            Decision::RedirectToLogin => format!("{color_yellow}{decision}{color_reset}"),
            Decision::RedirectToDefault => format!("{color_red}{decision}{color_reset}"),
        };
        match guard.redirect_target(decision) {
            Some(target) => println!("  {:<24} {}  ->  {}", rule.path, colored, target),
            None => println!("  {:<24} {}", rule.path, colored),
        }
    }
}

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.first().map(String::as_str) == Some("--schema") {
        print_schema();
        return;
    }

    let config = load_config();
    init_logging(&config.logging);

    println!("{style_bold}{color_cyan}CEPEX SYSTEM session check{style_reset}{color_reset}");

    let storage = create_storage(&config.storage);
    let mut session = Session::bootstrap(storage);

    match args.first().map(String::as_str) {
        Some("--login") => {
            let (login, password) = match (args.get(1), args.get(2)) {
                (Some(login), Some(password)) => (login.as_str(), password.as_str()),
                _ => {
                    eprintln!("Usage: cepex-session --login <login> <password>");
                    std::process::exit(1);
                }
            };
            let api_config = match config.api.as_ref() {
                Some(cfg) => cfg,
                None => {
                    eprintln!("config.yaml has no api section, cannot reach a login endpoint");
                    std::process::exit(1);
                }
            };

            let client = ApiClient::new(api_config);
            let token = match client.login(login, password).await {
                Ok(token) => token,
                Err(e) => {
                    eprintln!("Login failed: {}", e);
                    std::process::exit(1);
                }
            };
            if let Err(e) = session.login(&token) {
                eprintln!("Issued token was not usable: {}", e);
                std::process::exit(1);
            }
        }
        Some("--logout") => {
            session.logout();
        }
        Some(other) => {
            eprintln!(
                "Unknown argument '{}'. Known: --schema, --login, --logout",
                other
            );
            std::process::exit(1);
        }
        None => {}
    }

    report_session(&session);

    let guard = AccessGuard::new(&config.guard);
    report_routes(&guard, &session);
}
