use contracts::dashboards::d410_product_mix::ProductMixResponse;
use gloo_net::http::Request;

const API_BASE: &str = "/api/d410";

/// Получить датасет продуктового микса (категории, бренды, счётчики SKU)
pub async fn get_product_mix() -> Result<ProductMixResponse, String> {
    let url = format!("{}/product-mix", API_BASE);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: ProductMixResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}
