pub mod p900_scraped_offers;
