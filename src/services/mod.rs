pub mod category_hierarchy;
