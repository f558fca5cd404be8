//! Annual cost of owning a home compared to renting.
//!
//! The calculator turns an [`AffordabilityInput`] into an
//! [`AffordabilityResult`] in a fixed sequence of steps:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Soft validation (warnings only, never stops the calculation) |
//! | 2    | Marginal tax rates (federal bracket, flat state rate) |
//! | 3    | Upfront costs: down payment, closing costs, their opportunity cost |
//! | 4    | Amortized mortgage payment and the opportunity cost of a year of payments |
//! | 5    | Recurring costs: property tax, insurance, maintenance |
//! | 6    | Tax savings from the mortgage interest and property tax deductions |
//! | 7    | Home appreciation |
//! | 8    | Net cost: total costs minus total benefits |
//! | 9    | Affordability: monthly housing cost against monthly income |
//!
//! Opportunity cost, interest and appreciation are flat one-year figures;
//! none of them compound.
//!
//! # Example
//!
//! ```
//! use housing_core::{AffordabilityInput, FilingStatus, compute_net_cost};
//!
//! let input = AffordabilityInput::new(500_000.0, 120_000.0, 6.5, 3.0, FilingStatus::Single);
//! let result = compute_net_cost(&input);
//!
//! assert_eq!(result.breakdown.loan_amount, 400_000.0);
//! assert_eq!(result.total_tax_rate, 0.24);
//! assert!(!result.is_affordable);
//! assert!(result.warnings.is_empty());
//! ```

use tracing::{debug, warn};

use crate::calculations::common::{cap, percent_to_fraction};
use crate::calculations::mortgage::amortized_monthly_payment;
use crate::calculations::tax_rates::tax_rates;
use crate::calculations::validation::validate;
use crate::{AffordabilityInput, AffordabilityResult, CalculatorConfig, CostBreakdown};

/// Input percentages converted to fractions.
#[derive(Debug, Clone, Copy)]
struct Fractions {
    mortgage_rate: f64,
    home_appreciation: f64,
    insurance: f64,
    down_payment: f64,
    closing_costs: f64,
    opportunity_cost: f64,
    maintenance: f64,
    property_tax: f64,
}

impl Fractions {
    fn from_input(input: &AffordabilityInput) -> Self {
        Self {
            mortgage_rate: percent_to_fraction(input.mortgage_rate),
            home_appreciation: percent_to_fraction(input.home_appreciation),
            insurance: percent_to_fraction(input.insurance_percent),
            down_payment: percent_to_fraction(input.down_payment_percent),
            closing_costs: percent_to_fraction(input.closing_costs_percent),
            opportunity_cost: percent_to_fraction(input.opportunity_cost_rate),
            maintenance: percent_to_fraction(input.maintenance_cost_rate),
            property_tax: percent_to_fraction(input.property_tax_rate),
        }
    }
}

/// Cash committed at closing.
#[derive(Debug, Clone, Copy, PartialEq)]
struct UpfrontCosts {
    down_payment: f64,
    closing_costs: f64,
    opportunity_cost: f64,
}

/// Loan size and its payments.
#[derive(Debug, Clone, Copy, PartialEq)]
struct MortgageCosts {
    loan_amount: f64,
    monthly_payment: f64,
    annual_payment: f64,
    opportunity_cost: f64,
}

/// Costs that recur every year regardless of financing.
#[derive(Debug, Clone, Copy, PartialEq)]
struct RecurringCosts {
    property_tax: f64,
    property_tax_deduction: f64,
    insurance: f64,
    maintenance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct TaxSavings {
    mortgage_interest: f64,
    property_tax: f64,
}

/// Calculator for the buy-versus-rent estimate.
///
/// Holds the policy constants; every call to [`calculate`](Self::calculate)
/// is independent and side-effect free apart from `tracing` events.
#[derive(Debug, Clone, Default)]
pub struct AffordabilityCalculator {
    config: CalculatorConfig,
}

impl AffordabilityCalculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Runs the full estimate.
    ///
    /// Never fails. Out-of-range inputs are reported in
    /// [`AffordabilityResult::warnings`] and still go through the arithmetic,
    /// so degenerate values (zero income, zero term) show up as NaN or
    /// infinity in the numbers.
    pub fn calculate(
        &self,
        input: &AffordabilityInput,
    ) -> AffordabilityResult {
        let warnings: Vec<String> = validate(input)
            .into_iter()
            .map(|w| {
                warn!(warning = %w, "questionable estimate input");
                w.to_string()
            })
            .collect();

        let fractions = Fractions::from_input(input);
        let price = input.house_price;

        let rates = tax_rates(
            input.user_income,
            input.filing_status,
            self.config.state_tax_rate,
            fractions.property_tax,
        );
        let total_tax_rate = rates.total();

        let upfront = self.upfront_costs(price, &fractions);
        let mortgage = self.mortgage_costs(
            price - upfront.down_payment,
            &fractions,
            input.mortgage_years,
        );
        let total_opportunity_cost = upfront.opportunity_cost + mortgage.opportunity_cost;

        let recurring = self.recurring_costs(price, &fractions);
        let savings = self.tax_savings(
            mortgage.loan_amount,
            fractions.mortgage_rate,
            recurring.property_tax_deduction,
            total_tax_rate,
        );
        let home_appreciation_value = price * fractions.home_appreciation;

        let total_annual_costs = mortgage.annual_payment
            + recurring.property_tax
            + recurring.insurance
            + recurring.maintenance
            + total_opportunity_cost;
        let total_annual_benefits =
            home_appreciation_value + savings.mortgage_interest + savings.property_tax;
        let total_net_cost = total_annual_costs - total_annual_benefits;

        let monthly_payment = self.monthly_housing_cost(&mortgage, &recurring);
        let front_end_ratio = self.front_end_ratio(monthly_payment, input.user_income);
        let is_affordable = self.is_affordable(front_end_ratio);

        debug!(
            house_price = price,
            total_net_cost,
            monthly_payment,
            front_end_ratio,
            is_affordable,
            "computed ownership cost"
        );

        AffordabilityResult {
            total_net_cost,
            monthly_payment,
            front_end_ratio,
            is_affordable,
            total_tax_rate,
            tax_rates: rates,
            breakdown: CostBreakdown {
                down_payment: upfront.down_payment,
                closing_costs: upfront.closing_costs,
                loan_amount: mortgage.loan_amount,
                monthly_mortgage_payment: mortgage.monthly_payment,
                annual_mortgage_payment: mortgage.annual_payment,
                upfront_opportunity_cost: upfront.opportunity_cost,
                mortgage_opportunity_cost: mortgage.opportunity_cost,
                total_opportunity_cost,
                property_tax: recurring.property_tax,
                insurance: recurring.insurance,
                maintenance: recurring.maintenance,
                mortgage_interest_tax_savings: savings.mortgage_interest,
                property_tax_tax_savings: savings.property_tax,
                home_appreciation_value,
                total_annual_costs,
                total_annual_benefits,
            },
            warnings,
        }
    }

    /// Down payment, closing costs and the return foregone on both.
    fn upfront_costs(
        &self,
        price: f64,
        fractions: &Fractions,
    ) -> UpfrontCosts {
        let down_payment = price * fractions.down_payment;
        let closing_costs = price * fractions.closing_costs;

        UpfrontCosts {
            down_payment,
            closing_costs,
            opportunity_cost: (down_payment + closing_costs) * fractions.opportunity_cost,
        }
    }

    /// Mortgage payments on `loan_amount` and the return foregone on one
    /// year of them.
    fn mortgage_costs(
        &self,
        loan_amount: f64,
        fractions: &Fractions,
        years: u32,
    ) -> MortgageCosts {
        let monthly_payment = amortized_monthly_payment(loan_amount, fractions.mortgage_rate, years);
        let annual_payment = monthly_payment * 12.0;

        MortgageCosts {
            loan_amount,
            monthly_payment,
            annual_payment,
            opportunity_cost: annual_payment * fractions.opportunity_cost,
        }
    }

    fn recurring_costs(
        &self,
        price: f64,
        fractions: &Fractions,
    ) -> RecurringCosts {
        let property_tax = price * fractions.property_tax;

        RecurringCosts {
            property_tax,
            property_tax_deduction: cap(property_tax, self.config.property_tax_deduction_cap),
            insurance: price * fractions.insurance,
            maintenance: price * fractions.maintenance,
        }
    }

    /// Tax saved by deducting mortgage interest and property tax.
    ///
    /// Interest is approximated as the capped principal times the annual
    /// rate, not the first-year interest of the amortization schedule.
    fn tax_savings(
        &self,
        loan_amount: f64,
        mortgage_rate: f64,
        property_tax_deduction: f64,
        total_tax_rate: f64,
    ) -> TaxSavings {
        let deductible_principal = cap(loan_amount, self.config.mortgage_principal_deduction_cap);
        let annual_interest = deductible_principal * mortgage_rate;

        TaxSavings {
            mortgage_interest: annual_interest * total_tax_rate,
            property_tax: property_tax_deduction * total_tax_rate,
        }
    }

    /// Monthly cost of housing, excluding opportunity cost.
    fn monthly_housing_cost(
        &self,
        mortgage: &MortgageCosts,
        recurring: &RecurringCosts,
    ) -> f64 {
        (mortgage.annual_payment + recurring.property_tax + recurring.insurance + recurring.maintenance)
            / 12.0
    }

    fn front_end_ratio(
        &self,
        monthly_payment: f64,
        annual_income: f64,
    ) -> f64 {
        monthly_payment / (annual_income / 12.0)
    }

    fn is_affordable(
        &self,
        front_end_ratio: f64,
    ) -> bool {
        front_end_ratio <= self.config.front_end_ratio_limit
    }
}

/// Computes the estimate with the default policy constants.
///
/// Total, deterministic and free of side effects other than `tracing`
/// events. See [`AffordabilityCalculator::calculate`].
pub fn compute_net_cost(input: &AffordabilityInput) -> AffordabilityResult {
    AffordabilityCalculator::default().calculate(input)
}
