quantity!(
    /// Dollars per kilowatt-hour.
    KilowattHourRate, suffix: "USD/kWh", precision: 4
);
