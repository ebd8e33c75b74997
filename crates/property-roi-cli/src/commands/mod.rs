pub mod property_roi;
