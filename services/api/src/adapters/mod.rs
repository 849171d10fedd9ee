pub mod fact_llm;
pub mod store;
