pub mod sales_calc;
