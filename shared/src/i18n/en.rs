//! English locale table

pub(super) const TABLE: &[(&str, &str)] = &[
    // Login screen
    ("welcome", "Welcome to"),
    ("guest_login", "Continue as Guest"),
    ("phone_login", "Continue with Phone Number"),
    ("register_new", "Register New Account"),
    ("login_description", "Start your smart shopping experience"),
    ("powered_by", "Powered by SwiftCart Technology"),
    // Phone login dialog
    ("enter_phone", "Enter Phone Number"),
    ("phone_number", "Phone Number"),
    ("continue", "Continue"),
    ("enter_otp", "Enter Verification Code"),
    ("otp_sent", "We've sent a 6-digit code to"),
    ("verify", "Verify"),
    ("resend_code", "Resend Code"),
    ("registration_title", "Registration Successful"),
    // Registration form
    ("full_name", "Full Name"),
    ("register", "Register"),
    ("create_account", "Create Your Account"),
    // User profile & points
    ("my_points", "My Points"),
    ("points", "Points"),
    ("purchase_history", "Purchase History"),
    ("logout", "Logout"),
    ("no_purchase_history", "No purchase history yet"),
    ("date", "Date"),
    ("amount", "Amount"),
    ("item_name", "Item Name"),
    ("brand", "Brand"),
    ("qty", "Qty"),
    // Home screen
    ("home_title", "Smart Shopping Dashboard"),
    ("find_items", "Find Items"),
    ("shopping_cart", "Shopping Cart"),
    ("items_detected", "Items Detected"),
    ("total_amount", "Total Amount"),
    ("quick_view", "Quick View"),
    ("simulate_scan", "Simulate Item Detection"),
    ("auto_detect", "Auto-Detect"),
    ("auto_detect_desc", "Camera & weight sensors active"),
    // Navigation
    ("navigation_active", "Navigation Active"),
    ("store_map", "Store Map"),
    ("turn_by_turn", "Turn-by-Turn Directions"),
    ("you_are_here", "You are here"),
    ("entrance", "Entrance"),
    ("walk_straight", "Walk straight through the"),
    ("estimated_distance", "Estimated walking distance"),
    ("meters", "meters"),
    ("item_found", "Item Found - Close Navigation"),
    ("navigation_started", "Navigation started"),
    // Search
    ("search_items", "Search Items"),
    ("all_categories", "All Categories"),
    ("all_brands", "All Brands"),
    ("compare_brands", "Compare Brands"),
    ("navigate", "Navigate"),
    ("promotion", "Promotion"),
    ("no_items_found", "No items found"),
    // Cart
    ("view_cart", "View Cart & Checkout"),
    ("cart_summary", "Cart Summary"),
    ("quantity", "Quantity"),
    ("remove", "Remove"),
    ("proceed_payment", "Proceed to Payment"),
    ("continue_shopping", "Continue Shopping"),
    ("empty_cart", "Your cart is empty"),
    ("start_shopping", "Start adding items to your cart"),
    // Payment
    ("payment", "Payment"),
    ("order_summary", "Order Summary"),
    ("items", "items"),
    ("subtotal", "Subtotal"),
    ("tax", "Tax (6%)"),
    ("total", "Total"),
    ("payment_method", "Payment Method"),
    ("credit_card", "Credit/Debit Card"),
    ("e_wallet", "E-Wallet"),
    ("cash", "Cash"),
    ("confirm_payment", "Confirm Payment"),
    ("cancel", "Cancel"),
    ("payment_verified", "Payment verified successfully"),
    // Success
    ("payment_successful", "Payment Successful!"),
    ("thank_you", "Thank you for shopping with us"),
    ("receipt_sent", "Your receipt has been sent to your email"),
    ("exit_store", "Exit Store"),
    // Chatbot
    ("chatbot_title", "SwiftCart Assistant"),
    ("chatbot_subtitle", "Always here to help"),
    ("type_message", "Type your message..."),
    ("quick_actions", "Quick actions:"),
    ("not_in_stock", "Not in stock"),
    // Brand comparison
    ("brand_comparison", "Brand Comparison"),
    ("comparing", "Comparing"),
    ("products", "products"),
    ("best_value", "Best Value"),
    // Common
    ("back", "Back"),
    ("close", "Close"),
    ("ok", "OK"),
    ("loading", "Loading..."),
    ("error", "Error"),
    ("success", "Success"),
];
