pub mod care_plan;
