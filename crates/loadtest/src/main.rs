use goose::prelude::*;
use serde_json::json;

async fn health_check(user: &mut GooseUser) -> TransactionResult {
    let _goose_metrics = user.get("/health").await?;
    Ok(())
}

async fn list_items(user: &mut GooseUser) -> TransactionResult {
    let _goose_metrics = user.get("/items").await?;
    Ok(())
}

async fn create_item(user: &mut GooseUser) -> TransactionResult {
    let body = json!({
        "name": format!("loadtest-{}", user.weighted_users_index),
        "description": "Created by the load test",
    });
    let _goose_metrics = user.post_json("/items", &body).await?;
    Ok(())
}

async fn create_default_item(user: &mut GooseUser) -> TransactionResult {
    let _goose_metrics = user.post("/items", "").await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), GooseError> {
    GooseAttack::initialize()?
        .register_scenario(
            scenario!("HealthCheck").register_transaction(transaction!(health_check)),
        )
        .register_scenario(
            scenario!("Items")
                .register_transaction(transaction!(list_items).set_weight(4)?)
                .register_transaction(transaction!(create_item).set_weight(2)?)
                .register_transaction(transaction!(create_default_item)),
        )
        .execute()
        .await?;

    Ok(())
}
