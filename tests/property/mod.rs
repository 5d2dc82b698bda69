mod validation_proptest;
