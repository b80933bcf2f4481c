use lionweb_server_config::generator::run;
use lionweb_server_config::template::TemplateVariant;

fn main() {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    if let Err(e) = run(TemplateVariant::Versioned) {
        log::error!("Failed to generate server config: {e}");
        std::process::exit(1);
    }
}
