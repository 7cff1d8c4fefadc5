mod test_analyze_api;
mod test_gemini_provider;
mod test_review_api;
