use member_order_di::{
    composition::AppContext,
    config::AppConfig,
    domain::{Grade, Member, MemberId},
};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "member_order_di=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Compose services
    let context = match AppContext::new(&config) {
        Ok(context) => context,
        Err(e) => {
            tracing::error!("Failed to compose services: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let member_id = MemberId::new(1);
    context
        .member_service()
        .join(Member::new(member_id, "memberA", Grade::Vip));

    match context.member_service().find_member(member_id) {
        Ok(member) => tracing::info!("Found member: {} ({:?})", member.name(), member.grade()),
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    }

    let order = match context.order_service().create_order(member_id, "itemA", 10000) {
        Ok(order) => order,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("{}", order);
    tracing::info!("Total price: {}", order.total());

    match serde_json::to_string_pretty(&order) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            tracing::error!("Failed to serialize order: {}", e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
