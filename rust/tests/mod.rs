mod weekday_properties;
