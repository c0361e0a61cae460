use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use storefront_core::{
    BasketSource, OrderSource, ServiceCost, ShippingAddress, UnavailabilityReason,
};
use storefront_services::{
    BehaviorComponent, CustomCarrier, FixedCost, Service, ServiceProvider, WaivingCost,
    WeightLimits,
};
use storefront_shared::Currency;

/// Country-conditional fixture: pricier to Sweden, refuses Finland
#[derive(Debug)]
struct ExpensiveSweden;

impl ExpensiveSweden {
    const NAME: &'static str = "Expenseefe-a Svedee Sheepping";

    fn destination<'a>(source: &'a dyn OrderSource) -> Option<&'a str> {
        source.shipping_address().map(|a| a.country.as_str())
    }
}

impl BehaviorComponent for ExpensiveSweden {
    fn kind(&self) -> &'static str {
        "expensive_sweden"
    }

    fn name(&self, _service: &Service, _source: &dyn OrderSource) -> Option<String> {
        Some(Self::NAME.to_string())
    }

    fn costs(&self, _service: &Service, source: &dyn OrderSource) -> Vec<ServiceCost> {
        let four = source.create_price(dec!(4.00));
        let five = source.create_price(dec!(5.00));
        if Self::destination(source) == Some("SE") {
            vec![ServiceCost::new(five).with_base_price(four)]
        } else {
            vec![ServiceCost::new(four)]
        }
    }

    fn unavailability_reasons(
        &self,
        _service: &Service,
        source: &dyn OrderSource,
    ) -> Vec<UnavailabilityReason> {
        if Self::destination(source) == Some("FI") {
            vec![UnavailabilityReason::new(
                "we_no_speak_finnish",
                "Veell nut sheep unytheeng tu Feenlund!",
            )]
        } else {
            Vec::new()
        }
    }
}

fn basket_to(country: Option<&str>) -> BasketSource {
    let mut basket = BasketSource::new(Currency::new("EUR"));
    basket
        .add_line("Sauna stones", dec!(6), Some(dec!(2)))
        .add_line("Birch whisk", dec!(4), Some(dec!(3)))
        .add_line("Gift wrap", dec!(0), None);
    if let Some(country) = country {
        basket.ship_to(ShippingAddress::in_country(country));
    }
    basket
}

fn nordic_shipping() -> Service {
    CustomCarrier::new("Nordic Post")
        .create_service(Some("custom"), "Nordic parcel")
        .unwrap()
        .with_component(ExpensiveSweden)
        .with_component(WaivingCost::new(dec!(5), dec!(10)))
        .with_component(WeightLimits::new(Some(dec!(4)), Some(dec!(10))))
}

#[test]
fn test_finland_is_vetoed() {
    let service = nordic_shipping();
    let source = basket_to(Some("FI"));

    let reasons = service.unavailability_reasons(&source);
    assert_eq!(reasons.len(), 1);
    assert_eq!(reasons[0].code, "we_no_speak_finnish");
    assert!(!service.is_available_for(&source));
}

#[test]
fn test_sweden_costs_more_than_nominal() {
    let source = basket_to(Some("SE"));
    let costs = ExpensiveSweden.costs(&nordic_shipping(), &source);

    let expected = ServiceCost::new(source.create_price(dec!(5)))
        .with_base_price(source.create_price(dec!(4)));
    assert_eq!(costs, vec![expected]);
}

#[test]
fn test_other_destinations_pay_base_price() {
    for country in [None, Some("NO")] {
        let source = basket_to(country);
        let costs = ExpensiveSweden.costs(&nordic_shipping(), &source);
        assert_eq!(costs, vec![ServiceCost::new(source.create_price(dec!(4)))]);
        assert!(ExpensiveSweden.unavailability_reasons(&nordic_shipping(), &source).is_empty());
    }
}

#[test]
fn test_end_to_end_quote_to_norway() {
    let service = nordic_shipping();
    let source = basket_to(Some("NO"));

    // Products total exactly 10: the waiving cost is waived, weight 5 is in range
    assert_eq!(source.total_price_of_products().amount, dec!(10));
    assert!(service.is_available_for(&source));

    let total = service.total_cost(&source);
    assert_eq!(total.price.amount, dec!(4));
    assert_eq!(total.base_price.amount, dec!(9));

    assert_eq!(service.effective_name(&source), ExpensiveSweden::NAME);
    let lines = service.lines(&source);
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| l.text == ExpensiveSweden::NAME));
}

#[test]
fn test_component_order_does_not_change_totals() {
    let source = basket_to(Some("SE"));
    let reordered = CustomCarrier::new("Nordic Post")
        .create_service(None, "Nordic parcel")
        .unwrap()
        .with_component(WeightLimits::new(Some(dec!(4)), Some(dec!(10))))
        .with_component(WaivingCost::new(dec!(5), dec!(10)))
        .with_component(ExpensiveSweden);

    assert_eq!(reordered.total_cost(&source), nordic_shipping().total_cost(&source));
    assert_eq!(reordered.is_available_for(&source), nordic_shipping().is_available_for(&source));
}

#[test]
fn test_fixed_cost_everywhere() {
    let service = CustomCarrier::new("Pickup")
        .create_service(None, "Store pickup")
        .unwrap()
        .with_component(FixedCost::new(dec!(1.99)));

    for country in [None, Some("FI"), Some("SE")] {
        let total = service.total_cost(&basket_to(country));
        assert_eq!(total.price.amount, dec!(1.99));
        assert_eq!(total.base_price.amount, total.price.amount);
    }
    assert_eq!(WeightLimits::total_weight(&basket_to(None)), Decimal::from(5));
}
