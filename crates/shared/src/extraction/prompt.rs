/// Instruction sent with every product photo.
pub const PRODUCT_EXTRACTION_PROMPT: &str = r#"
Extract product details from this image and return them in JSON format.
Ensure the output is a **valid JSON object** with these fields:
- "product_name": If the exact product name is missing, **infer it from the image and brand**.
- "brand": Extract the brand name.
- "price": If visible, extract the price. **If missing, estimate the price based on similar models.**
- "features": List **at least 4 features**. If some are missing, **generate reasonable features for this type of product.**
- "dimensions": If not visible, **estimate based on similar models in the same category.**

Important rules:
1. If the product name is missing, generate a likely name based on brand and category.
2. If price is missing, estimate it based on similar products.
3. If dimensions are missing, return an estimated size based on category.
4. Ensure JSON format is correct.

Example JSON output format:
```json
{
    "product_name": "Motorola Moto G Power (2023)",
    "brand": "Motorola",
    "price": "₹12,999",
    "features": [
        "50MP Quad Pixel camera",
        "5000mAh battery",
        "6.5-inch HD+ display",
        "Fast charging support"
    ],
    "dimensions": "167.3 x 76.4 x 9.3 mm"
}
```
"#;
