mod tracking;

enum ActionEnum {
    Up,
    Down,
}

const CONFIG_ENV_PREFIX: &str = "MIGRATION";
const CONFIG_ENV_SEPARATOR: &str = "__";
const CONFIG: &str = "config";
const ACTION_KEY: &str = "migrate.action";
const ACTION_UP: &str = "up";
const ACTION_DOWN: &str = "down";
const DB_CON: &str = "migrate.dbcon";

#[tokio::main]
async fn main() {
    let config = config::Config::builder()
        .add_source(
            config::File::with_name(CONFIG).required(false).format(config::FileFormat::Yaml),
        )
        .add_source(
            config::Environment::with_prefix(CONFIG_ENV_PREFIX).separator(CONFIG_ENV_SEPARATOR),
        )
        .build()
        .unwrap();
    let action = config.get_string(ACTION_KEY).unwrap();
    let db_con = config.get_string(DB_CON).unwrap();
    let action = match action.as_str() {
        ACTION_UP => ActionEnum::Up,
        ACTION_DOWN => ActionEnum::Down,
        _ => {
            eprintln!(
                "{} must be {} or {}, got {}",
                ACTION_KEY, ACTION_UP, ACTION_DOWN, action
            );
            return;
        }
    };
    match action {
        ActionEnum::Up => tracking::Migrator::migration_up(&db_con).await,
        ActionEnum::Down => tracking::Migrator::migration_down(&db_con).await,
    }
}
